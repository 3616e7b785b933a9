// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_buffer::{FrozenBuffer, SecureChars};
use parapet_util::hex_to_bytes;

use crate::{Argon2, Argon2Parameters, Argon2Variant, Argon2Version};

/// The RFC 9106 Section 5 test configuration: P = 32 x 0x01,
/// S = 16 x 0x02, K = 8 x 0x03, X = 12 x 0x04, t = 3, m = 32, p = 4.
fn rfc9106_generator(variant: Argon2Variant) -> Argon2 {
    let params = Argon2Parameters::builder(variant)
        .with_salt(FrozenBuffer::from_slice(&[0x02; 16]).unwrap())
        .with_secret(FrozenBuffer::from_slice(&[0x03; 8]).unwrap())
        .with_additional(FrozenBuffer::from_slice(&[0x04; 12]).unwrap())
        .with_iterations(3)
        .with_memory_kib(32)
        .with_parallelism(4)
        .with_version(Argon2Version::V0x13)
        .build()
        .unwrap();

    Argon2::new(params).unwrap()
}

fn rfc9106_tag(variant: Argon2Variant) -> [u8; 32] {
    let mut argon2 = rfc9106_generator(variant);
    let mut tag = [0u8; 32];
    argon2.generate(&[0x01; 32], &mut tag).unwrap();
    tag
}

/// RFC 9106 Section 5.1
#[test]
fn test_rfc9106_argon2d() {
    assert_eq!(
        rfc9106_tag(Argon2Variant::Argon2d).to_vec(),
        hex_to_bytes("512b391b6f1162975371d30919734294f868e3be3984f3c1a13a4db9fabe4acb")
    );
}

/// RFC 9106 Section 5.2
#[test]
fn test_rfc9106_argon2i() {
    assert_eq!(
        rfc9106_tag(Argon2Variant::Argon2i).to_vec(),
        hex_to_bytes("c814d9d1dc7f37aa13f0d77f2494bda1c8de6b016dd388d29952a4c4672b6ce8")
    );
}

/// RFC 9106 Section 5.3
#[test]
fn test_rfc9106_argon2id() {
    assert_eq!(
        rfc9106_tag(Argon2Variant::Argon2id).to_vec(),
        hex_to_bytes("0d640df58d78766c08c037a34a8b53c9d01ef0452d75b65eb52520e96b01e659")
    );
}

#[test]
fn test_determinism_and_reuse() {
    let mut argon2 = rfc9106_generator(Argon2Variant::Argon2id);

    let mut first = [0u8; 32];
    argon2.generate(&[0x01; 32], &mut first).unwrap();

    // The same generator instance derives the same tag again
    let mut second = [0u8; 32];
    argon2.generate(&[0x01; 32], &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_password_sensitivity() {
    let mut argon2 = rfc9106_generator(Argon2Variant::Argon2id);

    let mut a = [0u8; 32];
    argon2.generate(b"password-a", &mut a).unwrap();
    let mut b = [0u8; 32];
    argon2.generate(b"password-b", &mut b).unwrap();

    assert_ne!(a, b);
}

#[test]
fn test_versions_disagree() {
    let mut tags = Vec::new();
    for version in [Argon2Version::V0x10, Argon2Version::V0x13] {
        let params = Argon2Parameters::builder(Argon2Variant::Argon2i)
            .with_salt(FrozenBuffer::from_slice(&[0x02; 16]).unwrap())
            .with_iterations(2)
            .with_memory_kib(16)
            .with_parallelism(1)
            .with_version(version)
            .build()
            .unwrap();

        let mut argon2 = Argon2::new(params).unwrap();
        let mut tag = [0u8; 32];
        argon2.generate(b"password", &mut tag).unwrap();
        tags.push(tag);
    }

    assert_ne!(tags[0], tags[1]);
}

#[test]
fn test_char_password_matches_utf8_bytes() {
    let text = "pässword";
    let units: Vec<u16> = text.encode_utf16().collect();
    let chars = SecureChars::from_slice(&units).unwrap();

    let mut from_chars = [0u8; 32];
    rfc9106_generator(Argon2Variant::Argon2id)
        .generate_chars(&chars, &mut from_chars)
        .unwrap();

    let mut from_bytes = [0u8; 32];
    rfc9106_generator(Argon2Variant::Argon2id)
        .generate(text.as_bytes(), &mut from_bytes)
        .unwrap();

    assert_eq!(from_chars, from_bytes);
}

#[test]
fn test_long_output_uses_iterated_hash() {
    // > 64 bytes exercises the V1..Vr+1 chain of H'
    let mut argon2 = rfc9106_generator(Argon2Variant::Argon2id);
    let mut long = [0u8; 144];
    argon2.generate(b"password", &mut long).unwrap();

    let mut again = [0u8; 144];
    argon2.generate(b"password", &mut again).unwrap();
    assert_eq!(long.to_vec(), again.to_vec());
    assert!(long.iter().any(|&b| b != 0));
}
