// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::*;

#[test]
fn test_u32_round_trip() {
    let mut bytes = [0u8; 4];
    u32_to_le(0xdead_beef, &mut bytes);
    assert_eq!(bytes, [0xef, 0xbe, 0xad, 0xde]);
    assert_eq!(u32_from_le(&bytes), 0xdead_beef);
}

#[test]
fn test_u64_round_trip() {
    let mut bytes = [0u8; 8];
    u64_to_le(0x0123_4567_89ab_cdef, &mut bytes);
    assert_eq!(bytes, [0xef, 0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01]);
    assert_eq!(u64_from_le(&bytes), 0x0123_4567_89ab_cdef);
}

#[test]
fn test_u32_to_be() {
    let mut bytes = [0u8; 4];
    u32_to_be(0xdead_beef, &mut bytes);
    assert_eq!(bytes, [0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn test_bulk_u32_conversions() {
    let words = [1u32, 0x100, 0xffff_ffff];
    let mut bytes = [0u8; 12];
    u32_slice_to_le(&words, &mut bytes);

    let mut back = [0u32; 3];
    le_to_u32_slice(&bytes, &mut back);
    assert_eq!(words, back);
}

#[test]
fn test_bulk_u64_conversions() {
    let words = [u64::MAX, 0, 0x8000_0000_0000_0001];
    let mut bytes = [0u8; 24];
    u64_slice_to_le(&words, &mut bytes);

    let mut back = [0u64; 3];
    le_to_u64_slice(&bytes, &mut back);
    assert_eq!(words, back);
}

#[test]
fn test_constant_time_eq() {
    assert!(constant_time_eq(&[1, 2, 3], &[1, 2, 3]));
    assert!(!constant_time_eq(&[1, 2, 3], &[1, 2, 4]));
    assert!(!constant_time_eq(&[1, 2, 3], &[1, 2]));

    let empty: [u8; 0] = [];
    assert!(constant_time_eq(&empty, &empty));
}

#[test]
fn test_hex_to_bytes() {
    assert_eq!(hex_to_bytes("deadbeef"), vec![0xde, 0xad, 0xbe, 0xef]);
    assert_eq!(hex_to_bytes(""), Vec::<u8>::new());
    assert_eq!(hex_to_bytes("ABCDEF"), vec![0xab, 0xcd, 0xef]);
}

#[test]
#[should_panic]
fn test_hex_odd_length_panics() {
    hex_to_bytes("abc");
}
