// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{SecureChars, SecureInts, SecureLongs};

#[test]
fn test_ints_alloc_and_ops() {
    let mut ints = SecureInts::alloc(4).unwrap();
    assert!(ints.as_slice().iter().all(|&w| w == 0));

    ints.set(0, 0xdead_beef);
    ints.xor(0, 0xffff_ffff);
    assert_eq!(ints.get(0), !0xdead_beefu32);

    ints.fill(7);
    assert_eq!(ints.as_slice(), &[7, 7, 7, 7]);

    ints.zero();
    assert_eq!(ints.len(), 4);
    assert!(ints.as_slice().iter().all(|&w| w == 0));
}

#[test]
fn test_longs_from_slice_and_clone() {
    let longs = SecureLongs::from_slice(&[u64::MAX, 1]).unwrap();
    let mut copy = longs.try_clone().unwrap();
    copy.set(1, 2);

    assert_eq!(longs.as_slice(), &[u64::MAX, 1]);
    assert_eq!(copy.as_slice(), &[u64::MAX, 2]);
}

#[test]
fn test_chars_round_trip() {
    let units: Vec<u16> = "pässword".encode_utf16().collect();
    let chars = SecureChars::from_slice(&units).unwrap();
    let decoded: String = char::decode_utf16(chars.as_slice().iter().copied())
        .map(|c| c.unwrap())
        .collect();
    assert_eq!(decoded, "pässword");
}

#[test]
fn test_zero_length_typed_arrays() {
    let mut longs = SecureLongs::alloc(0).unwrap();
    longs.zero();
    assert!(longs.is_empty());
}
