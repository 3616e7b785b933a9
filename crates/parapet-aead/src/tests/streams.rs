// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{AeadError, DecryptStream, EncryptStream, SecretBox, TAG_LENGTH};

#[test]
fn test_stream_matches_whole_buffer() {
    let key = [0xaau8; 32];
    let nonce = [0xbbu8; 24];
    let plaintext: Vec<u8> = (0..1000u32).map(|i| i as u8).collect();

    let sealed = SecretBox::seal(&key, &nonce, &plaintext).unwrap();

    let mut stream = EncryptStream::new(&key, &nonce).unwrap();
    let mut data = plaintext.clone();
    // Deliberately uneven chunking across the 64-byte keystream window
    stream.update_in_place(&mut data[..1]).unwrap();
    let (_, rest) = data.split_at_mut(1);
    let (chunk_b, rest) = rest.split_at_mut(130);
    stream.update_in_place(chunk_b).unwrap();
    stream.update_in_place(rest).unwrap();
    let tag = stream.finalize();

    assert_eq!(&sealed[..plaintext.len()], &data[..]);
    assert_eq!(&sealed[plaintext.len()..], &tag[..]);
}

#[test]
fn test_decrypt_stream_round_trip() {
    let key = [0x01u8; 32];
    let nonce = [0x02u8; 24];
    let plaintext = [0x33u8; 257];

    let sealed = SecretBox::seal(&key, &nonce, &plaintext).unwrap();
    let (body, tag) = sealed.split_at(sealed.len() - TAG_LENGTH);

    let mut stream = DecryptStream::new(&key, &nonce).unwrap();
    let mut data = body.to_vec();
    let (head, tail) = data.split_at_mut(100);
    stream.update_in_place(head).unwrap();
    stream.update_in_place(tail).unwrap();
    stream.finalize(tag.try_into().unwrap()).unwrap();

    assert_eq!(&data[..], &plaintext[..]);
}

#[test]
fn test_decrypt_stream_detects_tampering() {
    let key = [0x0fu8; 32];
    let nonce = [0xf0u8; 24];
    let plaintext = [0x44u8; 80];

    let sealed = SecretBox::seal(&key, &nonce, &plaintext).unwrap();
    let (body, tag) = sealed.split_at(sealed.len() - TAG_LENGTH);

    let mut stream = DecryptStream::new(&key, &nonce).unwrap();
    let mut data = body.to_vec();
    data[40] ^= 0x80;
    stream.update_in_place(&mut data).unwrap();

    let result = stream.finalize(tag.try_into().unwrap());
    assert!(matches!(result, Err(AeadError::AuthenticationFailed)));
}

#[test]
fn test_empty_stream() {
    let key = [0u8; 32];
    let nonce = [0u8; 24];

    let stream = EncryptStream::new(&key, &nonce).unwrap();
    let tag = stream.finalize();

    let sealed = SecretBox::seal(&key, &nonce, b"").unwrap();
    assert_eq!(&sealed[..], &tag[..]);
}
