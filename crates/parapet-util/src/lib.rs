// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte-order and constant-time helpers shared by the Parapet crates.
//!
//! The cipher and KDF cores serialize their word state little-endian; the
//! bulk converters here keep those loops out of the hot files. Comparison
//! of authenticators goes through [`constant_time_eq`].

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;

use subtle::ConstantTimeEq;

#[cfg(test)]
mod tests;

/// Reads a little-endian `u32` from 4 bytes.
#[inline(always)]
pub fn u32_from_le(bytes: &[u8]) -> u32 {
    debug_assert!(bytes.len() >= 4);
    (bytes[0] as u32) | (bytes[1] as u32) << 8 | (bytes[2] as u32) << 16 | (bytes[3] as u32) << 24
}

/// Writes a `u32` as 4 little-endian bytes.
#[inline(always)]
pub fn u32_to_le(value: u32, bytes: &mut [u8]) {
    debug_assert!(bytes.len() >= 4);
    bytes[0] = value as u8;
    bytes[1] = (value >> 8) as u8;
    bytes[2] = (value >> 16) as u8;
    bytes[3] = (value >> 24) as u8;
}

/// Reads a little-endian `u64` from 8 bytes.
#[inline(always)]
pub fn u64_from_le(bytes: &[u8]) -> u64 {
    debug_assert!(bytes.len() >= 8);
    (u32_from_le(&bytes[0..4]) as u64) | (u32_from_le(&bytes[4..8]) as u64) << 32
}

/// Writes a `u64` as 8 little-endian bytes.
#[inline(always)]
pub fn u64_to_le(value: u64, bytes: &mut [u8]) {
    debug_assert!(bytes.len() >= 8);
    u32_to_le(value as u32, &mut bytes[0..4]);
    u32_to_le((value >> 32) as u32, &mut bytes[4..8]);
}

/// Writes a `u32` as 4 big-endian bytes.
#[inline(always)]
pub fn u32_to_be(value: u32, bytes: &mut [u8]) {
    debug_assert!(bytes.len() >= 4);
    bytes[0] = (value >> 24) as u8;
    bytes[1] = (value >> 16) as u8;
    bytes[2] = (value >> 8) as u8;
    bytes[3] = value as u8;
}

/// Unpacks `words.len()` little-endian `u32` values from `bytes`.
#[inline]
pub fn le_to_u32_slice(bytes: &[u8], words: &mut [u32]) {
    debug_assert!(bytes.len() >= words.len() * 4);
    for (i, word) in words.iter_mut().enumerate() {
        *word = u32_from_le(&bytes[i * 4..]);
    }
}

/// Packs `words` into `bytes` little-endian.
#[inline]
pub fn u32_slice_to_le(words: &[u32], bytes: &mut [u8]) {
    debug_assert!(bytes.len() >= words.len() * 4);
    for (i, word) in words.iter().enumerate() {
        u32_to_le(*word, &mut bytes[i * 4..]);
    }
}

/// Unpacks `words.len()` little-endian `u64` values from `bytes`.
#[inline]
pub fn le_to_u64_slice(bytes: &[u8], words: &mut [u64]) {
    debug_assert!(bytes.len() >= words.len() * 8);
    for (i, word) in words.iter_mut().enumerate() {
        *word = u64_from_le(&bytes[i * 8..]);
    }
}

/// Packs `words` into `bytes` little-endian.
#[inline]
pub fn u64_slice_to_le(words: &[u64], bytes: &mut [u8]) {
    debug_assert!(bytes.len() >= words.len() * 8);
    for (i, word) in words.iter().enumerate() {
        u64_to_le(*word, &mut bytes[i * 8..]);
    }
}

/// Constant-time equality comparison for byte slices.
///
/// Returns `true` if slices are equal, `false` otherwise. Length
/// mismatch returns early; content comparison time does not depend on
/// where the difference occurs.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

/// Parses a hexadecimal string into bytes.
///
/// # Panics
///
/// Panics if the string contains invalid hex characters or has odd length.
#[inline]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");
    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).expect("invalid hex digit"))
        .collect()
}
