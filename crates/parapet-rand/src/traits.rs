// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_buffer::SecureBuffer;

use crate::error::EntropyError;

/// Trait for cryptographically secure random number generators.
///
/// Implementations must provide randomness suitable for cryptographic
/// operations (nonce and salt generation). Typically backed by OS-level
/// CSPRNGs.
pub trait EntropySource {
    /// Fills the destination buffer with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the system entropy
    /// source is unavailable or fails to generate random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;

    /// Fills a [`SecureBuffer`] with cryptographically secure random bytes.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`fill_bytes`](Self::fill_bytes).
    fn fill_secure(&self, dest: &mut SecureBuffer) -> Result<(), EntropyError> {
        self.fill_bytes(dest.as_mut_slice())
    }
}
