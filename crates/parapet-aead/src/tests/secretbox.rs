// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{AeadError, SecretBox, TAG_LENGTH};

#[test]
fn test_round_trip() {
    let key = [0x42u8; 32];
    let nonce = [0x24u8; 24];
    let plaintext = b"attack at dawn, retreat at dusk";

    let sealed = SecretBox::seal(&key, &nonce, plaintext).unwrap();
    assert_eq!(sealed.len(), plaintext.len() + TAG_LENGTH);
    assert_ne!(&sealed[..plaintext.len()], &plaintext[..]);

    let opened = SecretBox::open(&key, &nonce, &sealed).unwrap();
    assert_eq!(opened.as_slice(), plaintext);
}

/// Zero key, zero nonce, empty plaintext: the output is exactly the tag.
#[test]
fn test_empty_plaintext_yields_lone_tag() {
    let key = [0u8; 32];
    let nonce = [0u8; 24];

    let sealed = SecretBox::seal(&key, &nonce, b"").unwrap();
    assert_eq!(sealed.len(), TAG_LENGTH);

    let opened = SecretBox::open(&key, &nonce, &sealed).unwrap();
    assert!(opened.is_empty());
}

#[test]
fn test_round_trip_block_boundaries() {
    let key = [0x10u8; 32];
    let nonce = [0x20u8; 24];

    for len in [0usize, 1, 63, 64, 65, 4097] {
        let plaintext: Vec<u8> = (0..len).map(|i| (i * 3) as u8).collect();
        let sealed = SecretBox::seal(&key, &nonce, &plaintext).unwrap();
        let opened = SecretBox::open(&key, &nonce, &sealed).unwrap();
        assert_eq!(opened.as_slice(), &plaintext[..], "failed for len {len}");
    }
}

#[test]
fn test_tamper_detection_across_bit_positions() {
    let key = [0x77u8; 32];
    let nonce = [0x88u8; 24];
    let plaintext = [0x5au8; 96];

    let sealed = SecretBox::seal(&key, &nonce, &plaintext).unwrap();

    // Flip a sample of single bits across ciphertext and tag
    for byte_index in [0, 1, 47, 95, 96, 103, 111] {
        for bit in [0, 3, 7] {
            let mut tampered = sealed.clone();
            tampered[byte_index] ^= 1 << bit;

            let result = SecretBox::open(&key, &nonce, &tampered);
            assert!(
                matches!(result, Err(AeadError::AuthenticationFailed)),
                "bit {bit} of byte {byte_index} not detected"
            );
        }
    }
}

#[test]
fn test_truncated_input_rejected() {
    let key = [1u8; 32];
    let nonce = [2u8; 24];

    for len in 0..TAG_LENGTH {
        let result = SecretBox::open(&key, &nonce, &vec![0u8; len]);
        assert!(matches!(result, Err(AeadError::CiphertextTooShort)));
    }
}

#[test]
fn test_wrong_key_fails_closed() {
    let nonce = [0u8; 24];
    let sealed = SecretBox::seal(&[3u8; 32], &nonce, b"secret").unwrap();

    let result = SecretBox::open(&[4u8; 32], &nonce, &sealed);
    assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
}

#[test]
fn test_wrong_nonce_fails_closed() {
    let key = [5u8; 32];
    let sealed = SecretBox::seal(&key, &[6u8; 24], b"secret").unwrap();

    let result = SecretBox::open(&key, &[7u8; 24], &sealed);
    assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
}

#[test]
fn test_invalid_key_length_fails_fast() {
    let result = SecretBox::seal(&[0u8; 16], &[0u8; 24], b"x");
    assert!(matches!(result, Err(AeadError::Cipher(_))));
}

#[test]
fn test_determinism() {
    let key = [9u8; 32];
    let nonce = [8u8; 24];
    let a = SecretBox::seal(&key, &nonce, b"same input").unwrap();
    let b = SecretBox::seal(&key, &nonce, b"same input").unwrap();
    assert_eq!(a, b);
}
