// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20 stream cipher engine (Snuffle 2005).

use zeroize::Zeroize;

use parapet_util::{le_to_u32_slice, u32_slice_to_le};

use crate::core_fn::salsa_core;
use crate::error::CipherError;
use crate::{KEY_LENGTH_128, KEY_LENGTH_256, SALSA20_NONCE_LENGTH};

pub(crate) const STATE_WORDS: usize = 16;
pub(crate) const BLOCK_LENGTH: usize = STATE_WORDS * 4;
const ROUNDS: u32 = 20;

/// "expand 16-byte k" followed by "expand 32-byte k", little-endian.
/// The key length selects which four words land in the constant slots.
pub(crate) const TAU_SIGMA: [u32; 8] = [
    0x61707865, 0x3120646e, 0x79622d36, 0x6b206574, // tau
    0x61707865, 0x3320646e, 0x79622d32, 0x6b206574, // sigma
];

/// Salsa20 stream cipher engine.
///
/// Lifecycle: *uninitialized* until the first keyed [`init`](Self::init),
/// then *keyed*; processing bytes moves through the keystream, and
/// [`skip`](Self::skip) / [`seek_to`](Self::seek_to) reposition within it.
/// Re-initializing with a nonce only (key `None`) keeps the current key.
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Salsa20 {
    pub(crate) state: [u32; STATE_WORDS],
    pub(crate) x: [u32; STATE_WORDS],
    pub(crate) keystream: [u8; BLOCK_LENGTH],
    pub(crate) index: usize,
    // 70-bit processing limit: carries out of (cw0, cw1) into cw2 bit 5
    cw0: u32,
    cw1: u32,
    cw2: u32,
    pub(crate) initialised: bool,
}

impl Default for Salsa20 {
    fn default() -> Self {
        Self::new()
    }
}

impl Salsa20 {
    /// Creates an uninitialized engine.
    pub fn new() -> Self {
        Self {
            state: [0; STATE_WORDS],
            x: [0; STATE_WORDS],
            keystream: [0; BLOCK_LENGTH],
            index: 0,
            cw0: 0,
            cw1: 0,
            cw2: 0,
            initialised: false,
        }
    }

    /// Initializes the engine with a key and an 8-byte nonce.
    ///
    /// The key must be 16 or 32 bytes. Passing `None` keeps the current
    /// key and only replaces the nonce; that is an error before the
    /// first keyed initialization.
    pub fn init(&mut self, key: Option<&[u8]>, nonce: &[u8]) -> Result<(), CipherError> {
        if nonce.len() != SALSA20_NONCE_LENGTH {
            return Err(CipherError::InvalidNonceLength {
                expected: SALSA20_NONCE_LENGTH,
                got: nonce.len(),
            });
        }

        match key {
            Some(key) => self.set_key(key, nonce)?,
            None => {
                if !self.initialised {
                    return Err(CipherError::NotInitialized);
                }
                le_to_u32_slice(nonce, &mut self.state[6..8]);
            }
        }

        self.reset();
        self.initialised = true;

        Ok(())
    }

    fn set_key(&mut self, key: &[u8], nonce: &[u8]) -> Result<(), CipherError> {
        if key.len() != KEY_LENGTH_128 && key.len() != KEY_LENGTH_256 {
            return Err(CipherError::InvalidKeyLength { got: key.len() });
        }

        let ts_off = (key.len() - 16) / 4;
        self.state[0] = TAU_SIGMA[ts_off];
        self.state[5] = TAU_SIGMA[ts_off + 1];
        self.state[10] = TAU_SIGMA[ts_off + 2];
        self.state[15] = TAU_SIGMA[ts_off + 3];

        le_to_u32_slice(&key[0..16], &mut self.state[1..5]);
        le_to_u32_slice(&key[key.len() - 16..], &mut self.state[11..15]);
        le_to_u32_slice(nonce, &mut self.state[6..8]);

        Ok(())
    }

    /// XORs `input` against the keystream into `output`.
    ///
    /// Encryption and decryption are this same operation.
    pub fn process(&mut self, input: &[u8], output: &mut [u8]) -> Result<(), CipherError> {
        if !self.initialised {
            return Err(CipherError::NotInitialized);
        }
        if output.len() < input.len() {
            return Err(CipherError::OutputTooShort {
                needed: input.len(),
                got: output.len(),
            });
        }
        if self.limit_exceeded(input.len()) {
            return Err(CipherError::MaxBytesExceeded);
        }

        for (dst, src) in output.iter_mut().zip(input.iter()) {
            *dst = self.keystream[self.index] ^ src;
            self.index = (self.index + 1) & 63;

            if self.index == 0 {
                self.advance_counter();
                self.generate_keystream();
            }
        }

        Ok(())
    }

    /// XORs `data` against the keystream in place.
    pub fn process_in_place(&mut self, data: &mut [u8]) -> Result<(), CipherError> {
        if !self.initialised {
            return Err(CipherError::NotInitialized);
        }
        if self.limit_exceeded(data.len()) {
            return Err(CipherError::MaxBytesExceeded);
        }

        for byte in data.iter_mut() {
            *byte ^= self.keystream[self.index];
            self.index = (self.index + 1) & 63;

            if self.index == 0 {
                self.advance_counter();
                self.generate_keystream();
            }
        }

        Ok(())
    }

    /// Moves `delta` bytes through the keystream without producing
    /// output. Negative values move backwards.
    pub fn skip(&mut self, delta: i64) -> Result<i64, CipherError> {
        if !self.initialised {
            return Err(CipherError::NotInitialized);
        }

        if delta >= 0 {
            let mut remaining = delta as u64;

            if remaining >= BLOCK_LENGTH as u64 {
                let count = remaining / BLOCK_LENGTH as u64;
                self.advance_counter_by(count);
                remaining -= count * BLOCK_LENGTH as u64;
            }

            let old_index = self.index;
            self.index = (self.index + remaining as usize) & 63;

            if self.index < old_index {
                self.advance_counter();
            }
        } else {
            let mut remaining = delta.unsigned_abs();

            if remaining >= BLOCK_LENGTH as u64 {
                let count = remaining / BLOCK_LENGTH as u64;
                self.retreat_counter_by(count)?;
                remaining -= count * BLOCK_LENGTH as u64;
            }

            for _ in 0..remaining {
                if self.index == 0 {
                    self.retreat_counter()?;
                }
                self.index = (self.index.wrapping_sub(1)) & 63;
            }
        }

        self.generate_keystream();

        Ok(delta)
    }

    /// Repositions to an absolute keystream offset from the start of the
    /// current nonce.
    pub fn seek_to(&mut self, position: i64) -> Result<i64, CipherError> {
        if !self.initialised {
            return Err(CipherError::NotInitialized);
        }
        self.reset();
        self.skip(position)
    }

    /// Current keystream position in bytes.
    pub fn position(&self) -> i64 {
        (self.counter() as i64) * BLOCK_LENGTH as i64 + self.index as i64
    }

    /// Rewinds to keystream position zero, clearing the processing
    /// limit counter.
    pub fn reset(&mut self) {
        self.index = 0;
        self.cw0 = 0;
        self.cw1 = 0;
        self.cw2 = 0;
        self.state[8] = 0;
        self.state[9] = 0;
        self.generate_keystream();
    }

    /// Wipes the engine state; a new keyed [`init`](Self::init) is
    /// required afterwards.
    pub fn zero(&mut self) {
        self.zeroize();
    }

    pub(crate) fn generate_keystream(&mut self) {
        salsa_core(ROUNDS, &self.state, &mut self.x);
        u32_slice_to_le(&self.x, &mut self.keystream);
    }

    fn counter(&self) -> u64 {
        ((self.state[9] as u64) << 32) | self.state[8] as u64
    }

    fn advance_counter(&mut self) {
        self.state[8] = self.state[8].wrapping_add(1);
        if self.state[8] == 0 {
            self.state[9] = self.state[9].wrapping_add(1);
        }
    }

    fn advance_counter_by(&mut self, diff: u64) {
        let hi = (diff >> 32) as u32;
        let lo = diff as u32;

        if hi > 0 {
            self.state[9] = self.state[9].wrapping_add(hi);
        }

        let old = self.state[8];
        self.state[8] = self.state[8].wrapping_add(lo);

        if old != 0 && self.state[8] < old {
            self.state[9] = self.state[9].wrapping_add(1);
        }
    }

    fn retreat_counter(&mut self) -> Result<(), CipherError> {
        if self.state[8] == 0 && self.state[9] == 0 {
            return Err(CipherError::CounterUnderflow);
        }

        self.state[8] = self.state[8].wrapping_sub(1);
        if self.state[8] == u32::MAX {
            self.state[9] = self.state[9].wrapping_sub(1);
        }

        Ok(())
    }

    fn retreat_counter_by(&mut self, diff: u64) -> Result<(), CipherError> {
        let hi = (diff >> 32) as u32;
        let lo = diff as u32;

        if hi != 0 {
            if self.state[9] >= hi {
                self.state[9] = self.state[9].wrapping_sub(hi);
            } else {
                return Err(CipherError::CounterUnderflow);
            }
        }

        if self.state[8] >= lo {
            self.state[8] = self.state[8].wrapping_sub(lo);
        } else if self.state[9] != 0 {
            self.state[9] = self.state[9].wrapping_sub(1);
            self.state[8] = self.state[8].wrapping_sub(lo);
        } else {
            return Err(CipherError::CounterUnderflow);
        }

        Ok(())
    }

    fn limit_exceeded(&mut self, len: usize) -> bool {
        let old = self.cw0;
        self.cw0 = self.cw0.wrapping_add(len as u32);

        if self.cw0 < old {
            self.cw1 = self.cw1.wrapping_add(1);
            if self.cw1 == 0 {
                self.cw2 = self.cw2.wrapping_add(1);
                return (self.cw2 & 0x20) != 0;
            }
        }

        false
    }
}

impl core::fmt::Debug for Salsa20 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Salsa20 {{ [protected] }}")
    }
}
