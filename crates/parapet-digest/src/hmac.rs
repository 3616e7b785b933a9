// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104, generic over the sealed [`Digest`] trait.
//!
//! One digest instance serves both passes: the inner hash streams the
//! message, the outer hash runs inside `finalize_into`. Pads are
//! zeroized when the MAC is reset or dropped.

use zeroize::Zeroize;

use crate::traits::Digest;

const MAX_BLOCK_LEN: usize = 128;
const MAX_HASH_LEN: usize = 64;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC state over any [`Digest`].
pub struct Hmac<D: Digest> {
    digest: D,
    k_ipad: [u8; MAX_BLOCK_LEN],
    k_opad: [u8; MAX_BLOCK_LEN],
    block_len: usize,
}

impl<D: Digest> Hmac<D> {
    /// Creates an HMAC keyed with `key` over the given digest instance.
    ///
    /// A key longer than the digest block is hashed first, per RFC 2104.
    pub fn new(mut digest: D, key: &[u8]) -> Self {
        let block_len = digest.block_len();
        debug_assert!(block_len <= MAX_BLOCK_LEN);

        let mut key_block = [0u8; MAX_BLOCK_LEN];
        if key.len() > block_len {
            let hash_len = digest.output_len();
            digest.reset();
            digest.update(key);
            digest.finalize_into(&mut key_block[..hash_len]);
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut k_ipad = [0u8; MAX_BLOCK_LEN];
        let mut k_opad = [0u8; MAX_BLOCK_LEN];
        for i in 0..block_len {
            k_ipad[i] = key_block[i] ^ IPAD;
            k_opad[i] = key_block[i] ^ OPAD;
        }
        key_block.zeroize();

        digest.reset();
        digest.update(&k_ipad[..block_len]);

        Self {
            digest,
            k_ipad,
            k_opad,
            block_len,
        }
    }

    /// Absorbs message data.
    pub fn update(&mut self, data: &[u8]) {
        self.digest.update(data);
    }

    /// Writes the MAC into `out` and restarts the keyed state.
    ///
    /// `out` must be exactly [`output_len`](Self::output_len) bytes.
    pub fn finalize_into(&mut self, out: &mut [u8]) {
        let hash_len = self.digest.output_len();
        debug_assert_eq!(out.len(), hash_len);

        let mut inner = [0u8; MAX_HASH_LEN];
        self.digest.finalize_into(&mut inner[..hash_len]);

        self.digest.update(&self.k_opad[..self.block_len]);
        self.digest.update(&inner[..hash_len]);
        self.digest.finalize_into(out);
        inner.zeroize();

        // Ready for the next message under the same key
        self.digest.update(&self.k_ipad[..self.block_len]);
    }

    /// Restarts the keyed state, discarding absorbed message data.
    pub fn reset(&mut self) {
        self.digest.reset();
        self.digest.update(&self.k_ipad[..self.block_len]);
    }

    /// MAC output width in bytes.
    pub fn output_len(&self) -> usize {
        self.digest.output_len()
    }
}

impl<D: Digest> Drop for Hmac<D> {
    fn drop(&mut self) {
        self.k_ipad.zeroize();
        self.k_opad.zeroize();
    }
}

impl<D: Digest> core::fmt::Debug for Hmac<D> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Hmac {{ [protected] }}")
    }
}
