// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

pub(crate) mod sealed {
    pub trait Sealed {}

    impl Sealed for crate::Blake2b {}
    impl Sealed for crate::Sha256 {}
}

/// Streaming digest over a closed algorithm set.
///
/// The trait is sealed: it is implemented by exactly [`Blake2b`](crate::Blake2b)
/// and [`Sha256`](crate::Sha256) and cannot be implemented outside this
/// crate.
pub trait Digest: sealed::Sealed {
    /// Absorbs `data` into the digest state.
    fn update(&mut self, data: &[u8]);

    /// Writes the digest into `out` and wipes the hashing state.
    ///
    /// `out` must be exactly [`output_len`](Self::output_len) bytes. The
    /// digest is reset and ready for a new message afterwards.
    fn finalize_into(&mut self, out: &mut [u8]);

    /// Restores the initial state, wiping any absorbed input.
    fn reset(&mut self);

    /// Digest output width in bytes.
    fn output_len(&self) -> usize;

    /// Internal block length in bytes (HMAC pad width).
    fn block_len(&self) -> usize;
}
