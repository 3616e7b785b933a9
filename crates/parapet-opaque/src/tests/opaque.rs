// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_buffer::SecureBuffer;

use crate::{MemCryptContext, OpaqueBytes, OpaqueString};

#[test]
fn test_set_get_round_trip() {
    let ctx = MemCryptContext::global().unwrap();

    let mut plain = SecureBuffer::from_slice(b"hunter2").unwrap();
    let mut opaque = OpaqueBytes::new();
    opaque.set(ctx, &mut plain).unwrap();

    // Source was wiped by set
    assert!(plain.as_slice().iter().all(|&b| b == 0));

    let recovered = opaque.get(ctx).unwrap().unwrap();
    assert_eq!(recovered.as_slice(), b"hunter2");
}

#[test]
fn test_empty_holder() {
    let ctx = MemCryptContext::global().unwrap();

    let opaque = OpaqueBytes::new();
    assert!(opaque.is_empty());
    assert!(opaque.get(ctx).unwrap().is_none());
}

#[test]
fn test_empty_value_round_trip() {
    let ctx = MemCryptContext::global().unwrap();

    let mut plain = SecureBuffer::alloc(0).unwrap();
    let opaque = OpaqueBytes::from_value(ctx, &mut plain).unwrap();
    assert!(!opaque.is_empty());

    let recovered = opaque.get(ctx).unwrap().unwrap();
    assert!(recovered.is_empty());
}

#[test]
fn test_set_replaces_previous_value() {
    let ctx = MemCryptContext::global().unwrap();

    let mut first = SecureBuffer::from_slice(b"first").unwrap();
    let mut second = SecureBuffer::from_slice(b"second").unwrap();

    let mut opaque = OpaqueBytes::new();
    opaque.set(ctx, &mut first).unwrap();
    opaque.set(ctx, &mut second).unwrap();

    let recovered = opaque.get(ctx).unwrap().unwrap();
    assert_eq!(recovered.as_slice(), b"second");
}

#[test]
fn test_clear_empties_holder() {
    let ctx = MemCryptContext::global().unwrap();

    let mut plain = SecureBuffer::from_slice(b"gone").unwrap();
    let mut opaque = OpaqueBytes::from_value(ctx, &mut plain).unwrap();
    opaque.clear();

    assert!(opaque.is_empty());
    assert!(opaque.get(ctx).unwrap().is_none());
}

#[test]
fn test_set_from_copies_ciphertext() {
    let ctx = MemCryptContext::global().unwrap();

    let mut plain = SecureBuffer::from_slice(b"shared").unwrap();
    let original = OpaqueBytes::from_value(ctx, &mut plain).unwrap();

    let mut copy = OpaqueBytes::new();
    copy.set_from(&original).unwrap();

    let recovered = copy.get(ctx).unwrap().unwrap();
    assert_eq!(recovered.as_slice(), b"shared");

    // The copy is independent of the original
    drop(original);
    let still = copy.get(ctx).unwrap().unwrap();
    assert_eq!(still.as_slice(), b"shared");
}

#[test]
fn test_opaque_string_round_trip() {
    let ctx = MemCryptContext::global().unwrap();

    let mut text = String::from("correct horse battery staple");
    let mut opaque = OpaqueString::new();
    opaque.set(ctx, &mut text).unwrap();

    // Source was wiped
    assert!(text.is_empty());

    let bytes = opaque.get(ctx).unwrap().unwrap();
    assert_eq!(bytes.as_slice(), b"correct horse battery staple");
}

#[test]
fn test_opaque_string_chars() {
    let ctx = MemCryptContext::global().unwrap();

    let mut text = String::from("pässwörd");
    let expected: Vec<u16> = text.encode_utf16().collect();

    let mut opaque = OpaqueString::new();
    opaque.set(ctx, &mut text).unwrap();

    let chars = opaque.get_chars(ctx).unwrap().unwrap();
    assert_eq!(chars.as_slice(), &expected[..]);
}

#[test]
fn test_opaque_string_empty() {
    let ctx = MemCryptContext::global().unwrap();

    let opaque = OpaqueString::new();
    assert!(opaque.is_empty());
    assert!(opaque.get_chars(ctx).unwrap().is_none());
}
