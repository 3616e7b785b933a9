// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_util::hex_to_bytes;

use crate::{Digest, Sha256};

fn sha256(data: &[u8]) -> [u8; 32] {
    let mut digest = Sha256::new();
    digest.update(data);
    let mut out = [0u8; 32];
    digest.finalize_into(&mut out);
    out
}

/// RFC 6234 / FIPS 180 test vectors
#[test]
fn test_empty_input() {
    assert_eq!(
        sha256(b"").to_vec(),
        hex_to_bytes("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
    );
}

#[test]
fn test_abc() {
    assert_eq!(
        sha256(b"abc").to_vec(),
        hex_to_bytes("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
}

#[test]
fn test_two_block_message() {
    assert_eq!(
        sha256(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").to_vec(),
        hex_to_bytes("248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1")
    );
}

#[test]
fn test_streaming_matches_one_shot() {
    let data = [0x5au8; 300];

    let mut digest = Sha256::new();
    digest.update(&data[..1]);
    digest.update(&data[1..64]);
    digest.update(&data[64..65]);
    digest.update(&data[65..]);
    let mut streamed = [0u8; 32];
    digest.finalize_into(&mut streamed);

    assert_eq!(streamed, sha256(&data));
}

#[test]
fn test_finalize_resets_state() {
    let mut digest = Sha256::new();
    digest.update(b"first message");
    let mut out = [0u8; 32];
    digest.finalize_into(&mut out);

    digest.update(b"abc");
    digest.finalize_into(&mut out);
    assert_eq!(out, sha256(b"abc"));
}
