// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Poly1305 one-time authenticator (26-bit limb arithmetic).
//!
//! The key must never authenticate more than one message; the AEAD
//! layer derives it per-message from the cipher keystream.

use zeroize::Zeroize;

use parapet_util::{u32_from_le, u32_to_le};

use crate::{KEY_LENGTH, TAG_LENGTH};

const BLOCK_LENGTH: usize = 16;

/// Poly1305 authenticator state with guaranteed zeroization.
#[derive(Zeroize, Default)]
#[zeroize(drop)]
pub struct Poly1305 {
    r: [u32; 5],
    s: [u8; 16],
    acc: [u64; 5],
    buffer: [u8; BLOCK_LENGTH],
    buffer_len: usize,
}

impl Poly1305 {
    /// Creates an authenticator keyed with a 32-byte one-time key.
    pub fn new(key: &[u8; KEY_LENGTH]) -> Self {
        let mut mac = Self::default();
        mac.init(key);
        mac
    }

    /// Re-keys the authenticator, discarding any absorbed data.
    pub fn init(&mut self, key: &[u8; KEY_LENGTH]) {
        self.acc = [0; 5];
        self.buffer.zeroize();
        self.buffer_len = 0;

        // Clamp r per the Poly1305 specification
        let t0 = u32_from_le(&key[0..4]) & 0x0fff_ffff;
        let t1 = u32_from_le(&key[4..8]) & 0x0fff_fffc;
        let t2 = u32_from_le(&key[8..12]) & 0x0fff_fffc;
        let t3 = u32_from_le(&key[12..16]) & 0x0fff_fffc;

        self.r[0] = t0 & 0x3ff_ffff;
        self.r[1] = ((t0 >> 26) | (t1 << 6)) & 0x3ff_ffff;
        self.r[2] = ((t1 >> 20) | (t2 << 12)) & 0x3ff_ffff;
        self.r[3] = ((t2 >> 14) | (t3 << 18)) & 0x3ff_ffff;
        self.r[4] = t3 >> 8;

        self.s.copy_from_slice(&key[16..32]);
    }

    fn process_block(&mut self, block: &[u8; BLOCK_LENGTH], hibit: u32) {
        let t0 = u32_from_le(&block[0..4]);
        let t1 = u32_from_le(&block[4..8]);
        let t2 = u32_from_le(&block[8..12]);
        let t3 = u32_from_le(&block[12..16]);

        self.acc[0] += (t0 & 0x3ff_ffff) as u64;
        self.acc[1] += (((t0 >> 26) | (t1 << 6)) & 0x3ff_ffff) as u64;
        self.acc[2] += (((t1 >> 20) | (t2 << 12)) & 0x3ff_ffff) as u64;
        self.acc[3] += (((t2 >> 14) | (t3 << 18)) & 0x3ff_ffff) as u64;
        self.acc[4] += ((t3 >> 8) | (hibit << 24)) as u64;

        let r0 = self.r[0] as u64;
        let r1 = self.r[1] as u64;
        let r2 = self.r[2] as u64;
        let r3 = self.r[3] as u64;
        let r4 = self.r[4] as u64;

        let s1 = r1 * 5;
        let s2 = r2 * 5;
        let s3 = r3 * 5;
        let s4 = r4 * 5;

        let mut d0 =
            self.acc[0] * r0 + self.acc[1] * s4 + self.acc[2] * s3 + self.acc[3] * s2
                + self.acc[4] * s1;
        let mut d1 =
            self.acc[0] * r1 + self.acc[1] * r0 + self.acc[2] * s4 + self.acc[3] * s3
                + self.acc[4] * s2;
        let mut d2 =
            self.acc[0] * r2 + self.acc[1] * r1 + self.acc[2] * r0 + self.acc[3] * s4
                + self.acc[4] * s3;
        let mut d3 =
            self.acc[0] * r3 + self.acc[1] * r2 + self.acc[2] * r1 + self.acc[3] * r0
                + self.acc[4] * s4;
        let mut d4 =
            self.acc[0] * r4 + self.acc[1] * r3 + self.acc[2] * r2 + self.acc[3] * r1
                + self.acc[4] * r0;

        d1 += d0 >> 26;
        d0 &= 0x3ff_ffff;
        d2 += d1 >> 26;
        d1 &= 0x3ff_ffff;
        d3 += d2 >> 26;
        d2 &= 0x3ff_ffff;
        d4 += d3 >> 26;
        d3 &= 0x3ff_ffff;
        d0 += (d4 >> 26) * 5;
        d4 &= 0x3ff_ffff;
        d1 += d0 >> 26;
        d0 &= 0x3ff_ffff;

        self.acc = [d0, d1, d2, d3, d4];
    }

    /// Absorbs message data.
    pub fn update(&mut self, data: &[u8]) {
        let mut pos = 0;

        if self.buffer_len > 0 {
            let take = core::cmp::min(BLOCK_LENGTH - self.buffer_len, data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            pos = take;

            if self.buffer_len == BLOCK_LENGTH {
                let block = self.buffer;
                self.process_block(&block, 1);
                self.buffer.zeroize();
                self.buffer_len = 0;
            }
        }

        while pos + BLOCK_LENGTH <= data.len() {
            let block: [u8; BLOCK_LENGTH] = data[pos..pos + BLOCK_LENGTH]
                .try_into()
                .expect("block is exactly 16 bytes");
            self.process_block(&block, 1);
            pos += BLOCK_LENGTH;
        }

        if pos < data.len() {
            let remaining = data.len() - pos;
            self.buffer[..remaining].copy_from_slice(&data[pos..]);
            self.buffer_len = remaining;
        }
    }

    /// Writes the 16-byte tag and wipes the MAC state.
    pub fn finalize_into(&mut self, out: &mut [u8; TAG_LENGTH]) {
        if self.buffer_len > 0 {
            // Pad the partial block: 0x01 marker then zeros, hibit clear
            self.buffer[self.buffer_len] = 0x01;
            for i in self.buffer_len + 1..BLOCK_LENGTH {
                self.buffer[i] = 0;
            }
            let block = self.buffer;
            self.process_block(&block, 0);
            self.buffer.zeroize();
            self.buffer_len = 0;
        }

        let mut d0 = self.acc[0];
        let mut d1 = self.acc[1];
        let mut d2 = self.acc[2];
        let mut d3 = self.acc[3];
        let mut d4 = self.acc[4];

        // Full carry propagation
        d1 += d0 >> 26;
        d0 &= 0x3ff_ffff;
        d2 += d1 >> 26;
        d1 &= 0x3ff_ffff;
        d3 += d2 >> 26;
        d2 &= 0x3ff_ffff;
        d4 += d3 >> 26;
        d3 &= 0x3ff_ffff;
        d0 += (d4 >> 26) * 5;
        d4 &= 0x3ff_ffff;
        d1 += d0 >> 26;
        d0 &= 0x3ff_ffff;

        // Compute h + 5 and select h or h - (2^130 - 5) in constant time
        let mut g0 = d0 + 5;
        let mut g1 = d1 + (g0 >> 26);
        g0 &= 0x3ff_ffff;
        let mut g2 = d2 + (g1 >> 26);
        g1 &= 0x3ff_ffff;
        let mut g3 = d3 + (g2 >> 26);
        g2 &= 0x3ff_ffff;
        let g4 = d4 + (g3 >> 26);
        g3 &= 0x3ff_ffff;

        // mask = all 1s if h < 2^130 - 5 (keep h), all 0s otherwise (use g)
        let mask = (g4 >> 26).wrapping_sub(1);

        d0 = (d0 & mask) | (g0 & !mask);
        d1 = (d1 & mask) | (g1 & !mask);
        d2 = (d2 & mask) | (g2 & !mask);
        d3 = (d3 & mask) | (g3 & !mask);
        d4 &= mask;

        // Convert radix 2^26 to four 32-bit words
        let h0 = d0 | ((d1 & 0x3f) << 26);
        let h1 = (d1 >> 6) | ((d2 & 0xfff) << 20);
        let h2 = (d2 >> 12) | ((d3 & 0x3ffff) << 14);
        let h3 = (d3 >> 18) | ((d4 & 0xff_ffff) << 8);

        // Add s with carry propagation
        let mut f = h0 + u32_from_le(&self.s[0..4]) as u64;
        u32_to_le(f as u32, &mut out[0..4]);
        f = h1 + u32_from_le(&self.s[4..8]) as u64 + (f >> 32);
        u32_to_le(f as u32, &mut out[4..8]);
        f = h2 + u32_from_le(&self.s[8..12]) as u64 + (f >> 32);
        u32_to_le(f as u32, &mut out[8..12]);
        f = h3 + u32_from_le(&self.s[12..16]) as u64 + (f >> 32);
        u32_to_le(f as u32, &mut out[12..16]);

        self.zeroize();
    }

    /// One-shot MAC computation.
    pub fn compute(key: &[u8; KEY_LENGTH], data: &[u8], out: &mut [u8; TAG_LENGTH]) {
        let mut mac = Self::new(key);
        mac.update(data);
        mac.finalize_into(out);
    }
}

impl core::fmt::Debug for Poly1305 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Poly1305 {{ [protected] }}")
    }
}
