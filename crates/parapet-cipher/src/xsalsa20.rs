// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! XSalsa20: Salsa20 with a 192-bit extended nonce.

use zeroize::Zeroize;

use parapet_util::le_to_u32_slice;

use crate::core_fn::salsa_core;
use crate::error::CipherError;
use crate::salsa20::{Salsa20, STATE_WORDS};
use crate::{KEY_LENGTH_256, XSALSA20_NONCE_LENGTH};

/// XSalsa20 stream cipher engine.
///
/// Requires a 256-bit key and a 24-byte nonce. The first 16 nonce bytes
/// run through HSalsa20 (the core permutation without the final
/// addition) to derive a subkey; the remaining 8 bytes become the
/// standard Salsa20 nonce.
#[derive(Zeroize, Default)]
#[zeroize(drop)]
pub struct XSalsa20 {
    inner: Salsa20,
}

impl XSalsa20 {
    /// Creates an uninitialized engine.
    pub fn new() -> Self {
        Self {
            inner: Salsa20::new(),
        }
    }

    /// Initializes the engine with a 32-byte key and a 24-byte nonce.
    ///
    /// Unlike [`Salsa20`], re-initialization without a key is not
    /// supported: the subkey depends on the nonce, so every init needs
    /// the key material.
    pub fn init(&mut self, key: Option<&[u8]>, nonce: &[u8]) -> Result<(), CipherError> {
        let key = key.ok_or(CipherError::KeyRequired)?;

        if key.len() != KEY_LENGTH_256 {
            return Err(CipherError::InvalidKeyLength { got: key.len() });
        }
        if nonce.len() != XSALSA20_NONCE_LENGTH {
            return Err(CipherError::InvalidNonceLength {
                expected: XSALSA20_NONCE_LENGTH,
                got: nonce.len(),
            });
        }

        // Salsa20 state keyed for HSalsa20 over nonce[0..16]
        self.inner.init(Some(key), &nonce[0..8])?;
        le_to_u32_slice(&nonce[8..16], &mut self.inner.state[8..10]);

        // Core permutation without the final addition derives the subkey
        let mut hsalsa_out = [0u32; STATE_WORDS];
        salsa_core(20, &self.inner.state, &mut hsalsa_out);

        let state = &mut self.inner.state;
        state[1] = hsalsa_out[0].wrapping_sub(state[0]);
        state[2] = hsalsa_out[5].wrapping_sub(state[5]);
        state[3] = hsalsa_out[10].wrapping_sub(state[10]);
        state[4] = hsalsa_out[15].wrapping_sub(state[15]);

        state[11] = hsalsa_out[6].wrapping_sub(state[6]);
        state[12] = hsalsa_out[7].wrapping_sub(state[7]);
        state[13] = hsalsa_out[8].wrapping_sub(state[8]);
        state[14] = hsalsa_out[9].wrapping_sub(state[9]);

        hsalsa_out.zeroize();

        // Last 64 bits of the extended nonce
        le_to_u32_slice(&nonce[16..24], &mut self.inner.state[6..8]);

        self.inner.reset();

        Ok(())
    }

    /// XORs `input` against the keystream into `output`.
    pub fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), CipherError> {
        self.inner.process(input, output)
    }

    /// XORs `data` against the keystream in place.
    pub fn process_in_place(&mut self, data: &mut [u8]) -> Result<(), CipherError> {
        self.inner.process_in_place(data)
    }

    /// Moves `delta` bytes through the keystream without producing output.
    pub fn skip(&mut self, delta: i64) -> Result<i64, CipherError> {
        self.inner.skip(delta)
    }

    /// Repositions to an absolute keystream offset.
    pub fn seek_to(&mut self, position: i64) -> Result<i64, CipherError> {
        self.inner.seek_to(position)
    }

    /// Current keystream position in bytes.
    pub fn position(&self) -> i64 {
        self.inner.position()
    }

    /// Rewinds to keystream position zero.
    pub fn reset(&mut self) {
        self.inner.reset();
    }

    /// Wipes the engine state.
    pub fn zero(&mut self) {
        self.inner.zero();
    }
}

impl core::fmt::Debug for XSalsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "XSalsa20 {{ [protected] }}")
    }
}
