// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The SCrypt mixing core (RFC 7914).

use alloc::vec::Vec;

use zeroize::Zeroize;

use parapet_buffer::{SecureBuffer, SecureInts};
use parapet_cipher::salsa_core;
use parapet_util::{le_to_u32_slice, u32_slice_to_le};

use crate::error::ScryptError;
use crate::pbkdf2::pbkdf2_hmac_sha256;

const SUB_BLOCK_WORDS: usize = 16;

/// Immutable, eagerly validated SCrypt configuration.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScryptParameters {
    pub(crate) n: u32,
    pub(crate) r: u32,
    pub(crate) p: u32,
    pub(crate) dk_len: usize,
}

impl ScryptParameters {
    /// Validates `N` (cost), `r` (block size), `p` (parallelism) and the
    /// derived key length.
    pub fn new(n: u32, r: u32, p: u32, dk_len: usize) -> Result<Self, ScryptError> {
        if n <= 1 || !n.is_power_of_two() {
            return Err(ScryptError::InvalidCost { got: n });
        }

        // Only value of r for which the cost could overflow an i32
        if r == 1 && n >= 65536 {
            return Err(ScryptError::CostTooLargeForBlockSize { got: n });
        }

        if r < 1 {
            return Err(ScryptError::InvalidBlockSize);
        }

        let max_parallel = (i32::MAX as u32) / (128 * r * 8);
        if p < 1 || p > max_parallel {
            return Err(ScryptError::InvalidParallelism {
                got: p,
                max: max_parallel,
                r,
            });
        }

        if dk_len < 1 {
            return Err(ScryptError::OutputTooShort);
        }

        Ok(Self { n, r, p, dk_len })
    }

    /// Cost parameter N.
    pub fn cost(&self) -> u32 {
        self.n
    }

    /// Block size r.
    pub fn block_size(&self) -> u32 {
        self.r
    }

    /// Parallelism p.
    pub fn parallelism(&self) -> u32 {
        self.p
    }

    /// Derived key length in bytes.
    pub fn dk_len(&self) -> usize {
        self.dk_len
    }
}

/// The SCrypt key derivation function.
pub struct Scrypt;

impl Scrypt {
    /// Derives a key from `password` and `salt` under the given
    /// parameters. All working memory is wiped on every exit path.
    pub fn generate(
        params: &ScryptParameters,
        password: &[u8],
        salt: &[u8],
    ) -> Result<SecureBuffer, ScryptError> {
        let n = params.n as usize;
        let r = params.r as usize;
        let p = params.p as usize;

        let mf_len_bytes = r * 128;

        // Single-iteration PBKDF2 expands (password, salt) into p blocks
        let mut bytes = SecureBuffer::alloc(p * mf_len_bytes)?;
        pbkdf2_hmac_sha256(password, salt, 1, bytes.as_mut_slice());

        let b_len = bytes.len() / 4;
        let mut b = SecureInts::alloc(b_len)?;
        le_to_u32_slice(bytes.as_slice(), b.as_mut_slice());

        // Chunk the lookup table: 2^d chunks, none larger than ~32 KiB,
        // while each chunk still holds at least two entries
        let mut d = 0u32;
        let mut total = n * r;
        while (n - d as usize) > 2 && total > (1 << 10) {
            d += 1;
            total >>= 1;
        }

        let mf_len_words = mf_len_bytes / 4;
        let mut result: Result<(), ScryptError> = Ok(());
        for b_off in (0..b_len).step_by(mf_len_words) {
            // The p invocations are independent; executed sequentially
            if let Err(e) = smix(b.as_mut_slice(), b_off, n, d, r) {
                result = Err(e);
                break;
            }
        }

        let derived = match result {
            Ok(()) => {
                u32_slice_to_le(b.as_slice(), bytes.as_mut_slice());

                let mut dk = SecureBuffer::alloc(params.dk_len)?;
                pbkdf2_hmac_sha256(password, bytes.as_slice(), 1, dk.as_mut_slice());
                Ok(dk)
            }
            Err(e) => Err(e),
        };

        bytes.zero();
        b.zero();

        derived
    }
}

fn smix(b: &mut [u32], b_off: usize, n: usize, d: u32, r: usize) -> Result<(), ScryptError> {
    let pow_n = n.trailing_zeros();
    let blocks_per_chunk = n >> d;
    let chunk_count = 1usize << d;
    let chunk_mask = (blocks_per_chunk - 1) as u32;
    let chunk_pow = pow_n - d;

    let b_count = r * 32;

    let mut block_x1 = [0u32; SUB_BLOCK_WORDS];
    let mut block_x2 = [0u32; SUB_BLOCK_WORDS];
    let mut block_y = SecureInts::alloc(b_count)?;

    let mut x = SecureInts::alloc(b_count)?;
    let mut vv: Vec<SecureInts> = Vec::with_capacity(chunk_count);

    x.as_mut_slice().copy_from_slice(&b[b_off..b_off + b_count]);

    for _ in 0..chunk_count {
        let mut v = SecureInts::alloc(blocks_per_chunk * b_count)?;

        let mut off = 0;
        for _ in (0..blocks_per_chunk).step_by(2) {
            v.as_mut_slice()[off..off + b_count].copy_from_slice(x.as_slice());
            off += b_count;
            block_mix(
                x.as_slice(),
                &mut block_x1,
                &mut block_x2,
                block_y.as_mut_slice(),
                r,
            );
            v.as_mut_slice()[off..off + b_count].copy_from_slice(block_y.as_slice());
            off += b_count;
            block_mix(
                block_y.as_slice(),
                &mut block_x1,
                &mut block_x2,
                x.as_mut_slice(),
                r,
            );
        }

        vv.push(v);
    }

    let mask = (n - 1) as u32;
    for _ in 0..n {
        let j = x.get(b_count - 16) & mask;
        let v = &vv[(j >> chunk_pow) as usize];
        let v_off = (j & chunk_mask) as usize * b_count;

        for (y, (v_word, x_word)) in block_y
            .as_mut_slice()
            .iter_mut()
            .zip(v.as_slice()[v_off..v_off + b_count].iter().zip(x.as_slice()))
        {
            *y = v_word ^ x_word;
        }

        block_mix(
            block_y.as_slice(),
            &mut block_x1,
            &mut block_x2,
            x.as_mut_slice(),
            r,
        );
    }

    b[b_off..b_off + b_count].copy_from_slice(x.as_slice());

    for v in vv.iter_mut() {
        v.zero();
    }
    x.zero();
    block_x1.zeroize();
    block_x2.zeroize();
    block_y.zero();

    Ok(())
}

/// One BlockMix pass: interleaved Salsa20/8 over 64-byte sub-blocks,
/// writing even sub-blocks to the front half of `output` and odd ones
/// to the back half.
fn block_mix(
    input: &[u32],
    x1: &mut [u32; SUB_BLOCK_WORDS],
    x2: &mut [u32; SUB_BLOCK_WORDS],
    output: &mut [u32],
    r: usize,
) {
    x1.copy_from_slice(&input[input.len() - SUB_BLOCK_WORDS..]);

    let half_len = input.len() / 2;
    let mut b_off = 0;
    let mut y_off = 0;

    for _ in 0..2 * r {
        for (dst, (a, b)) in x2
            .iter_mut()
            .zip(x1.iter().zip(input[b_off..b_off + SUB_BLOCK_WORDS].iter()))
        {
            *dst = a ^ b;
        }

        salsa_core(8, x2, x1);
        output[y_off..y_off + SUB_BLOCK_WORDS].copy_from_slice(x1);

        y_off = half_len + b_off - y_off;
        b_off += SUB_BLOCK_WORDS;
    }
}
