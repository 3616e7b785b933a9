// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Blake2b implementation per RFC 7693.
//!
//! Variable output width (1..=64 bytes) and optional keying. The KDF
//! layers lean on the width parameter: Argon2's H' re-instantiates the
//! digest at several widths, the session-key derivation uses 32.

use zeroize::Zeroize;

use parapet_util::{u64_from_le, u64_slice_to_le};

use crate::error::DigestError;
use crate::traits::Digest;

const BLOCK_LEN: usize = 128;
const MAX_HASH_LEN: usize = 64;
const MAX_KEY_LEN: usize = 64;
const ROUNDS: usize = 12;

/// Blake2b IV per RFC 7693 Section 2.6
const IV: [u64; 8] = [
    0x6a09e667f3bcc908,
    0xbb67ae8584caa73b,
    0x3c6ef372fe94f82b,
    0xa54ff53a5f1d36f1,
    0x510e527fade682d1,
    0x9b05688c2b3e6c1f,
    0x1f83d9abfb41bd6b,
    0x5be0cd19137e2179,
];

/// Message word schedule per RFC 7693 Section 2.7 (rounds 10 and 11
/// repeat rounds 0 and 1)
const SIGMA: [[usize; 16]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

/// Blake2b streaming state with guaranteed zeroization.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Blake2b {
    h: [u64; 8],
    t: [u64; 2],
    v: [u64; 16],
    m: [u64; 16],
    buffer: [u8; BLOCK_LEN],
    buffer_len: usize,
    hash_len: usize,
    key_block: [u8; BLOCK_LEN],
    key_len: usize,
}

impl Blake2b {
    /// Creates an unkeyed Blake2b state producing `hash_len` bytes.
    ///
    /// `hash_len` must be 1..=64.
    pub fn new(hash_len: usize) -> Result<Self, DigestError> {
        Self::new_keyed(hash_len, &[])
    }

    /// Creates a keyed Blake2b state producing `hash_len` bytes.
    ///
    /// The key (up to 64 bytes) is absorbed as the first block per
    /// RFC 7693 Section 2.9. An empty key selects the unkeyed mode.
    pub fn new_keyed(hash_len: usize, key: &[u8]) -> Result<Self, DigestError> {
        if hash_len == 0 || hash_len > MAX_HASH_LEN {
            return Err(DigestError::InvalidOutputLength {
                requested: hash_len,
                max: MAX_HASH_LEN,
            });
        }
        if key.len() > MAX_KEY_LEN {
            return Err(DigestError::KeyTooLong {
                requested: key.len(),
                max: MAX_KEY_LEN,
            });
        }

        let mut state = Self {
            h: [0; 8],
            t: [0; 2],
            v: [0; 16],
            m: [0; 16],
            buffer: [0; BLOCK_LEN],
            buffer_len: 0,
            hash_len,
            key_block: [0; BLOCK_LEN],
            key_len: key.len(),
        };
        state.key_block[..key.len()].copy_from_slice(key);
        state.init_chain();
        Ok(state)
    }

    fn init_chain(&mut self) {
        self.h = IV;
        self.h[0] ^= 0x0101_0000 ^ ((self.key_len as u64) << 8) ^ (self.hash_len as u64);
        self.t = [0; 2];
        self.buffer_len = 0;

        if self.key_len > 0 {
            // Key is absorbed as a full padded first block
            self.buffer.copy_from_slice(&self.key_block);
            self.buffer_len = BLOCK_LEN;
        }
    }

    #[inline(always)]
    fn g(&mut self, a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
        self.v[a] = self.v[a].wrapping_add(self.v[b]).wrapping_add(x);
        self.v[d] = (self.v[d] ^ self.v[a]).rotate_right(32);
        self.v[c] = self.v[c].wrapping_add(self.v[d]);
        self.v[b] = (self.v[b] ^ self.v[c]).rotate_right(24);
        self.v[a] = self.v[a].wrapping_add(self.v[b]).wrapping_add(y);
        self.v[d] = (self.v[d] ^ self.v[a]).rotate_right(16);
        self.v[c] = self.v[c].wrapping_add(self.v[d]);
        self.v[b] = (self.v[b] ^ self.v[c]).rotate_right(63);
    }

    fn compress(&mut self, last: bool) {
        for i in 0..16 {
            self.m[i] = u64_from_le(&self.buffer[i * 8..]);
        }

        self.v[..8].copy_from_slice(&self.h);
        self.v[8..].copy_from_slice(&IV);
        self.v[12] ^= self.t[0];
        self.v[13] ^= self.t[1];
        if last {
            self.v[14] = !self.v[14];
        }

        for round in 0..ROUNDS {
            let s = &SIGMA[round];
            self.g(0, 4, 8, 12, self.m[s[0]], self.m[s[1]]);
            self.g(1, 5, 9, 13, self.m[s[2]], self.m[s[3]]);
            self.g(2, 6, 10, 14, self.m[s[4]], self.m[s[5]]);
            self.g(3, 7, 11, 15, self.m[s[6]], self.m[s[7]]);

            self.g(0, 5, 10, 15, self.m[s[8]], self.m[s[9]]);
            self.g(1, 6, 11, 12, self.m[s[10]], self.m[s[11]]);
            self.g(2, 7, 8, 13, self.m[s[12]], self.m[s[13]]);
            self.g(3, 4, 9, 14, self.m[s[14]], self.m[s[15]]);
        }

        for i in 0..8 {
            self.h[i] ^= self.v[i] ^ self.v[i + 8];
        }

        self.v.zeroize();
        self.m.zeroize();
    }

    #[inline(always)]
    fn increment_counter(&mut self, amount: u64) {
        self.t[0] = self.t[0].wrapping_add(amount);
        if self.t[0] < amount {
            self.t[1] = self.t[1].wrapping_add(1);
        }
    }
}

impl Digest for Blake2b {
    fn update(&mut self, data: &[u8]) {
        let mut pos = 0;

        // The final block must stay in the buffer: compress only when
        // more input follows.
        if self.buffer_len == BLOCK_LEN && !data.is_empty() {
            self.increment_counter(BLOCK_LEN as u64);
            self.compress(false);
            self.buffer_len = 0;
        }

        while !data[pos..].is_empty() {
            let take = core::cmp::min(BLOCK_LEN - self.buffer_len, data.len() - pos);
            self.buffer[self.buffer_len..self.buffer_len + take]
                .copy_from_slice(&data[pos..pos + take]);
            self.buffer_len += take;
            pos += take;

            if self.buffer_len == BLOCK_LEN && pos < data.len() {
                self.increment_counter(BLOCK_LEN as u64);
                self.compress(false);
                self.buffer_len = 0;
            }
        }
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.hash_len);

        self.increment_counter(self.buffer_len as u64);
        self.buffer[self.buffer_len..].fill(0);
        self.compress(true);

        let mut full = [0u8; MAX_HASH_LEN];
        u64_slice_to_le(&self.h, &mut full);
        out.copy_from_slice(&full[..self.hash_len]);
        full.zeroize();

        self.reset();
    }

    fn reset(&mut self) {
        self.h.zeroize();
        self.t.zeroize();
        self.v.zeroize();
        self.m.zeroize();
        self.buffer.zeroize();
        self.buffer_len = 0;
        self.init_chain();
    }

    fn output_len(&self) -> usize {
        self.hash_len
    }

    fn block_len(&self) -> usize {
        BLOCK_LEN
    }
}

impl core::fmt::Debug for Blake2b {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Blake2b {{ [protected] }}")
    }
}
