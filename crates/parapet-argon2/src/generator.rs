// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The Argon2 fill schedule and compression function.

use zeroize::Zeroize;

use parapet_buffer::{SecureBuffer, SecureChars, SecureLongs};
use parapet_digest::{Blake2b, Digest};
use parapet_util::{le_to_u64_slice, u32_to_le, u64_slice_to_le};

use crate::error::Argon2Error;
use crate::params::{Argon2Parameters, Argon2Variant, Argon2Version};

const BLOCK_SIZE: usize = 1024;
const QWORDS_IN_BLOCK: usize = BLOCK_SIZE / 8;
const ADDRESSES_IN_BLOCK: usize = 128;

const PREHASH_DIGEST_LENGTH: usize = 64;
const PREHASH_SEED_LENGTH: usize = 72;

const SYNC_POINTS: usize = 4;

const MIN_OUTLEN: usize = 4;

const M32L: u64 = 0xFFFF_FFFF;

#[derive(Debug, Clone, Copy)]
struct Position {
    pass: u32,
    slice: usize,
    lane: usize,
}

/// Working blocks for the compression function. One instance serves a
/// whole derivation; wiped on drop and at the end of every derivation.
#[derive(Zeroize)]
#[zeroize(drop)]
struct FillBlock {
    r: [u64; QWORDS_IN_BLOCK],
    z: [u64; QWORDS_IN_BLOCK],
    address_block: [u64; QWORDS_IN_BLOCK],
    input_block: [u64; QWORDS_IN_BLOCK],
}

impl Default for FillBlock {
    fn default() -> Self {
        Self {
            r: [0; QWORDS_IN_BLOCK],
            z: [0; QWORDS_IN_BLOCK],
            address_block: [0; QWORDS_IN_BLOCK],
            input_block: [0; QWORDS_IN_BLOCK],
        }
    }
}

impl FillBlock {
    /// Compresses memory[prev] and memory[reference] into memory[current].
    ///
    /// With `with_xor` the result is XORed into the existing block
    /// (passes after the first, version 0x13) instead of overwriting it.
    fn fill_memory_block(
        &mut self,
        memory: &mut [u64],
        prev: usize,
        reference: usize,
        current: usize,
        with_xor: bool,
    ) {
        let prev = prev * QWORDS_IN_BLOCK;
        let reference = reference * QWORDS_IN_BLOCK;
        let current = current * QWORDS_IN_BLOCK;

        for i in 0..QWORDS_IN_BLOCK {
            self.r[i] = memory[prev + i] ^ memory[reference + i];
        }
        self.z.copy_from_slice(&self.r);
        apply_blake(&mut self.z);

        if with_xor {
            for i in 0..QWORDS_IN_BLOCK {
                memory[current + i] ^= self.r[i] ^ self.z[i];
            }
        } else {
            for i in 0..QWORDS_IN_BLOCK {
                memory[current + i] = self.r[i] ^ self.z[i];
            }
        }
    }

    /// Generates the next 128 data-independent reference addresses.
    fn next_addresses(&mut self) {
        self.input_block[6] = self.input_block[6].wrapping_add(1);

        self.z.copy_from_slice(&self.input_block);
        apply_blake(&mut self.z);
        for i in 0..QWORDS_IN_BLOCK {
            self.address_block[i] = self.input_block[i] ^ self.z[i];
        }

        self.z.copy_from_slice(&self.address_block);
        apply_blake(&mut self.z);
        for i in 0..QWORDS_IN_BLOCK {
            self.address_block[i] ^= self.z[i];
        }
    }
}

/// The multiply-add quarter-round designed by the Lyra PHC team:
/// a <- a + b + 2·aL·bL, then c <- (c ^ a) >>> s.
#[inline(always)]
fn quarter_round(v: &mut [u64; QWORDS_IN_BLOCK], x: usize, y: usize, z: usize, s: u32) {
    let a = v[x];
    let b = v[y];

    let a = a
        .wrapping_add(b)
        .wrapping_add((a & M32L).wrapping_mul(b & M32L).wrapping_mul(2));
    let c = (v[z] ^ a).rotate_right(s);

    v[x] = a;
    v[z] = c;
}

#[inline(always)]
fn mix(v: &mut [u64; QWORDS_IN_BLOCK], a: usize, b: usize, c: usize, d: usize) {
    quarter_round(v, a, b, d, 32);
    quarter_round(v, c, d, b, 24);
    quarter_round(v, a, b, d, 16);
    quarter_round(v, c, d, b, 63);
}

#[allow(clippy::too_many_arguments)]
fn round_function(
    v: &mut [u64; QWORDS_IN_BLOCK],
    v0: usize,
    v1: usize,
    v2: usize,
    v3: usize,
    v4: usize,
    v5: usize,
    v6: usize,
    v7: usize,
    v8: usize,
    v9: usize,
    v10: usize,
    v11: usize,
    v12: usize,
    v13: usize,
    v14: usize,
    v15: usize,
) {
    mix(v, v0, v4, v8, v12);
    mix(v, v1, v5, v9, v13);
    mix(v, v2, v6, v10, v14);
    mix(v, v3, v7, v11, v15);

    mix(v, v0, v5, v10, v15);
    mix(v, v1, v6, v11, v12);
    mix(v, v2, v7, v8, v13);
    mix(v, v3, v4, v9, v14);
}

/// The Blake2b round permutation over the 1024-byte block: columns of
/// 16 words first, then rows.
fn apply_blake(z: &mut [u64; QWORDS_IN_BLOCK]) {
    for i in 0..8 {
        let i16 = 16 * i;
        round_function(
            z,
            i16,
            i16 + 1,
            i16 + 2,
            i16 + 3,
            i16 + 4,
            i16 + 5,
            i16 + 6,
            i16 + 7,
            i16 + 8,
            i16 + 9,
            i16 + 10,
            i16 + 11,
            i16 + 12,
            i16 + 13,
            i16 + 14,
            i16 + 15,
        );
    }

    for i in 0..8 {
        let i2 = 2 * i;
        round_function(
            z,
            i2,
            i2 + 1,
            i2 + 16,
            i2 + 17,
            i2 + 32,
            i2 + 33,
            i2 + 48,
            i2 + 49,
            i2 + 64,
            i2 + 65,
            i2 + 80,
            i2 + 81,
            i2 + 96,
            i2 + 97,
            i2 + 112,
            i2 + 113,
        );
    }
}

/// H', the variable-length hash built on Blake2b (RFC 9106 Section 3.3).
fn var_hash(input: &[u8], out: &mut [u8]) {
    let out_len = out.len();
    let mut out_len_bytes = [0u8; 4];
    u32_to_le(out_len as u32, &mut out_len_bytes);

    if out_len <= PREHASH_DIGEST_LENGTH {
        let mut digest =
            Blake2b::new(out_len).expect("infallible: 1..=64 is a valid Blake2b width");
        digest.update(&out_len_bytes);
        digest.update(input);
        digest.finalize_into(out);
        return;
    }

    let mut digest =
        Blake2b::new(PREHASH_DIGEST_LENGTH).expect("infallible: 64 is a valid Blake2b width");
    let mut out_buffer = [0u8; PREHASH_DIGEST_LENGTH];

    // V1
    digest.update(&out_len_bytes);
    digest.update(input);
    digest.finalize_into(&mut out_buffer);

    let half_len = PREHASH_DIGEST_LENGTH / 2;
    out[..half_len].copy_from_slice(&out_buffer[..half_len]);
    let mut out_pos = half_len;

    let r = (out_len + 31) / 32 - 2;

    // V2 to Vr
    for _ in 2..=r {
        digest.update(&out_buffer);
        digest.finalize_into(&mut out_buffer);

        out[out_pos..out_pos + half_len].copy_from_slice(&out_buffer[..half_len]);
        out_pos += half_len;
    }

    // Vr+1, sized to the remainder
    let last_len = out_len - 32 * r;
    let mut last =
        Blake2b::new(last_len).expect("infallible: remainder is a valid Blake2b width");
    last.update(&out_buffer);
    last.finalize_into(&mut out[out_pos..]);

    out_buffer.zeroize();
}

/// Argon2 generator: validated parameters plus the lane memory.
///
/// One instance can run any number of derivations; the memory is wiped
/// after each one and on drop.
pub struct Argon2 {
    params: Argon2Parameters,
    memory: SecureLongs,
    memory_blocks: usize,
    segment_length: usize,
    lane_length: usize,
}

impl Argon2 {
    /// Validates the configuration and allocates the lane memory.
    pub fn new(params: Argon2Parameters) -> Result<Self, Argon2Error> {
        // Builder has validated ranges; align the block count here.
        let lanes = params.lanes as usize;
        let mut memory_blocks = params.memory_kib as usize;

        if memory_blocks < 2 * SYNC_POINTS * lanes {
            memory_blocks = 2 * SYNC_POINTS * lanes;
        }

        let segment_length = memory_blocks / (lanes * SYNC_POINTS);
        let lane_length = segment_length * SYNC_POINTS;
        let memory_blocks = segment_length * lanes * SYNC_POINTS;

        let memory = SecureLongs::alloc(memory_blocks * QWORDS_IN_BLOCK)?;

        Ok(Self {
            params,
            memory,
            memory_blocks,
            segment_length,
            lane_length,
        })
    }

    /// Derives `out.len()` bytes from `password`.
    ///
    /// The output length must be at least 4 bytes. The lane memory and
    /// all intermediates are wiped before returning, on success and
    /// error alike.
    pub fn generate(&mut self, password: &[u8], out: &mut [u8]) -> Result<(), Argon2Error> {
        if out.len() < MIN_OUTLEN {
            return Err(Argon2Error::OutputTooShort {
                got: out.len(),
                min: MIN_OUTLEN,
            });
        }

        let mut block_bytes = SecureBuffer::alloc(BLOCK_SIZE)?;

        self.initialize(block_bytes.as_mut_slice(), password, out.len());
        self.fill_memory_blocks();
        self.digest(block_bytes.as_mut_slice(), out);

        self.memory.zero();
        block_bytes.zero();

        Ok(())
    }

    /// Derives `out.len()` bytes from a UTF-16 character password,
    /// converting to UTF-8 for the prehash and wiping the converted
    /// form afterwards.
    pub fn generate_chars(
        &mut self,
        password: &SecureChars,
        out: &mut [u8],
    ) -> Result<(), Argon2Error> {
        let mut utf8 = SecureBuffer::alloc(password.len() * 3)?;
        let mut used = 0;
        {
            let bytes = utf8.as_mut_slice();
            let mut scratch = [0u8; 4];
            for ch in char::decode_utf16(password.as_slice().iter().copied()) {
                let ch = ch.unwrap_or(char::REPLACEMENT_CHARACTER);
                let encoded = ch.encode_utf8(&mut scratch);
                bytes[used..used + encoded.len()].copy_from_slice(encoded.as_bytes());
                used += encoded.len();
            }
            scratch.zeroize();
        }

        let result = self.generate(&utf8.as_slice()[..used], out);
        utf8.zero();

        result
    }

    /// H0 and the first two blocks of every lane.
    fn initialize(&mut self, block_bytes: &mut [u8], password: &[u8], out_len: usize) {
        let mut blake = Blake2b::new(PREHASH_DIGEST_LENGTH)
            .expect("infallible: 64 is a valid Blake2b width");

        let mut word = [0u8; 4];
        for value in [
            self.params.lanes,
            out_len as u32,
            self.params.memory_kib,
            self.params.iterations,
            self.params.version as u32,
            self.params.variant as u32,
        ] {
            u32_to_le(value, &mut word);
            blake.update(&word);
        }

        add_byte_string(&mut blake, Some(password));
        add_byte_string(&mut blake, self.params.salt.as_ref().map(|b| b.as_slice()));
        add_byte_string(&mut blake, self.params.secret.as_ref().map(|b| b.as_slice()));
        add_byte_string(
            &mut blake,
            self.params.additional.as_ref().map(|b| b.as_slice()),
        );

        let mut seed = [0u8; PREHASH_SEED_LENGTH];
        blake.finalize_into(&mut seed[..PREHASH_DIGEST_LENGTH]);

        // (H0 ‖ 0 ‖ lane) and (H0 ‖ 1 ‖ lane), each stretched to 1024 bytes
        for lane in 0..self.params.lanes as usize {
            u32_to_le(lane as u32, &mut seed[PREHASH_DIGEST_LENGTH + 4..]);

            seed[PREHASH_DIGEST_LENGTH] = 0;
            var_hash(&seed, block_bytes);
            self.load_block(lane * self.lane_length, block_bytes);

            seed[PREHASH_DIGEST_LENGTH] = 1;
            var_hash(&seed, block_bytes);
            self.load_block(lane * self.lane_length + 1, block_bytes);
        }

        seed.zeroize();
    }

    fn load_block(&mut self, block_index: usize, bytes: &[u8]) {
        let offset = block_index * QWORDS_IN_BLOCK;
        le_to_u64_slice(
            bytes,
            &mut self.memory.as_mut_slice()[offset..offset + QWORDS_IN_BLOCK],
        );
    }

    fn fill_memory_blocks(&mut self) {
        let mut filler = FillBlock::default();

        for pass in 0..self.params.iterations {
            for slice in 0..SYNC_POINTS {
                for lane in 0..self.params.lanes as usize {
                    self.fill_segment(&mut filler, Position { pass, slice, lane });
                }
            }
        }
    }

    fn fill_segment(&mut self, filler: &mut FillBlock, position: Position) {
        let data_independent = self.is_data_independent(position);
        let starting_index = if position.pass == 0 && position.slice == 0 {
            2 // the first two blocks of each lane are already filled
        } else {
            0
        };

        let mut current_offset =
            position.lane * self.lane_length + position.slice * self.segment_length + starting_index;
        let mut prev_offset = if current_offset % self.lane_length == 0 {
            current_offset + self.lane_length - 1
        } else {
            current_offset - 1
        };

        if data_independent {
            self.init_address_blocks(filler, position);
        }

        let with_xor =
            position.pass != 0 && self.params.version != Argon2Version::V0x10;

        for index in starting_index..self.segment_length {
            let pseudo_random =
                self.pseudo_random(filler, index, prev_offset, data_independent);

            let ref_lane = self.ref_lane(position, pseudo_random);
            let ref_column = self.ref_column(
                position,
                index,
                pseudo_random,
                ref_lane == position.lane,
            );

            filler.fill_memory_block(
                self.memory.as_mut_slice(),
                prev_offset,
                self.lane_length * ref_lane + ref_column,
                current_offset,
                with_xor,
            );

            prev_offset = current_offset;
            current_offset += 1;
        }
    }

    fn is_data_independent(&self, position: Position) -> bool {
        match self.params.variant {
            Argon2Variant::Argon2i => true,
            Argon2Variant::Argon2id => position.pass == 0 && position.slice < SYNC_POINTS / 2,
            Argon2Variant::Argon2d => false,
        }
    }

    fn init_address_blocks(&self, filler: &mut FillBlock, position: Position) {
        filler.address_block.zeroize();
        filler.input_block.zeroize();

        filler.input_block[0] = position.pass as u64;
        filler.input_block[1] = position.lane as u64;
        filler.input_block[2] = position.slice as u64;
        filler.input_block[3] = self.memory_blocks as u64;
        filler.input_block[4] = self.params.iterations as u64;
        filler.input_block[5] = self.params.variant as u32 as u64;

        if position.pass == 0 && position.slice == 0 {
            // The first address block is consumed from index 2 onwards
            filler.next_addresses();
        }
    }

    fn pseudo_random(
        &self,
        filler: &mut FillBlock,
        index: usize,
        prev_offset: usize,
        data_independent: bool,
    ) -> u64 {
        if data_independent {
            let address_index = index % ADDRESSES_IN_BLOCK;
            if address_index == 0 {
                filler.next_addresses();
            }
            filler.address_block[address_index]
        } else {
            self.memory.get(prev_offset * QWORDS_IN_BLOCK)
        }
    }

    fn ref_lane(&self, position: Position, pseudo_random: u64) -> usize {
        if position.pass == 0 && position.slice == 0 {
            // Cannot reference other lanes yet
            return position.lane;
        }

        ((pseudo_random >> 32) % self.params.lanes as u64) as usize
    }

    fn ref_column(
        &self,
        position: Position,
        index: usize,
        pseudo_random: u64,
        same_lane: bool,
    ) -> usize {
        let (start_position, reference_area_size) = if position.pass == 0 {
            let area = if same_lane {
                position.slice * self.segment_length + index - 1
            } else if index == 0 {
                position.slice * self.segment_length - 1
            } else {
                position.slice * self.segment_length
            };
            (0, area as u64)
        } else {
            let start = ((position.slice + 1) * self.segment_length) % self.lane_length;
            let area = if same_lane {
                self.lane_length - self.segment_length + index - 1
            } else if index == 0 {
                self.lane_length - self.segment_length - 1
            } else {
                self.lane_length - self.segment_length
            };
            (start, area as u64)
        };

        let mut relative_position = pseudo_random & M32L;
        relative_position = (relative_position * relative_position) >> 32;
        relative_position =
            reference_area_size - 1 - ((reference_area_size * relative_position) >> 32);

        (start_position + relative_position as usize) % self.lane_length
    }

    /// XOR the last block of every lane and stretch to the output length.
    fn digest(&mut self, block_bytes: &mut [u8], out: &mut [u8]) {
        let final_offset = (self.lane_length - 1) * QWORDS_IN_BLOCK;

        for lane in 1..self.params.lanes as usize {
            let lane_offset = (lane * self.lane_length + self.lane_length - 1) * QWORDS_IN_BLOCK;
            for i in 0..QWORDS_IN_BLOCK {
                let value = self.memory.get(lane_offset + i);
                self.memory.xor(final_offset + i, value);
            }
        }

        u64_slice_to_le(
            &self.memory.as_slice()[final_offset..final_offset + QWORDS_IN_BLOCK],
            block_bytes,
        );

        var_hash(block_bytes, out);
    }
}

impl core::fmt::Debug for Argon2 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Argon2")
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}

fn add_byte_string(blake: &mut Blake2b, octets: Option<&[u8]>) {
    let mut word = [0u8; 4];

    match octets {
        None => {
            blake.update(&word);
        }
        Some(octets) => {
            u32_to_le(octets.len() as u32, &mut word);
            blake.update(&word);
            blake.update(octets);
        }
    }
}
