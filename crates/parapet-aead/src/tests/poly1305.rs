// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_util::hex_to_bytes;

use crate::Poly1305;

/// RFC 8439 Section 2.5.2
#[test]
fn test_rfc8439_vector() {
    let key: [u8; 32] =
        hex_to_bytes("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b")
            .try_into()
            .unwrap();

    let mut tag = [0u8; 16];
    Poly1305::compute(&key, b"Cryptographic Forum Research Group", &mut tag);

    assert_eq!(
        tag.to_vec(),
        hex_to_bytes("a8061dc1305136c6c22b8baf0c0127a9")
    );
}

#[test]
fn test_streaming_matches_one_shot() {
    let key = [0x7fu8; 32];
    let data = [0x11u8; 100];

    let mut one_shot = [0u8; 16];
    Poly1305::compute(&key, &data, &mut one_shot);

    let mut mac = Poly1305::new(&key);
    mac.update(&data[..15]);
    mac.update(&data[15..16]);
    mac.update(&data[16..17]);
    mac.update(&data[17..]);
    let mut streamed = [0u8; 16];
    mac.finalize_into(&mut streamed);

    assert_eq!(one_shot, streamed);
}

#[test]
fn test_empty_message() {
    let key = [0x42u8; 32];
    let mut tag = [0u8; 16];
    Poly1305::compute(&key, b"", &mut tag);

    // MAC of the empty message is just the s half of the key
    assert_eq!(&tag, &[0x42u8; 16]);
}

#[test]
fn test_single_bit_changes_tag() {
    let key = [0x24u8; 32];
    let mut a = [0u8; 16];
    let mut b = [0u8; 16];

    Poly1305::compute(&key, &[0b0000_0000], &mut a);
    Poly1305::compute(&key, &[0b0000_0001], &mut b);

    assert_ne!(a, b);
}
