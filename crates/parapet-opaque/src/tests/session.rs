// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_rand::SystemEntropySource;
use parapet_rand::test_utils::{MockEntropySource, MockEntropySourceBehaviour};

use crate::{MemCryptContext, OpaqueError, SESSION_KEY_LENGTH};

#[test]
fn test_global_context_is_stable() {
    let a = MemCryptContext::global().unwrap();
    let b = MemCryptContext::global().unwrap();
    assert!(core::ptr::eq(a, b));
}

#[test]
fn test_distinct_contexts_have_distinct_keys() {
    // Fresh entropy per derivation makes key collisions vanishingly rare
    let entropy = SystemEntropySource {};
    let a = MemCryptContext::new(&entropy).unwrap();
    let b = MemCryptContext::new(&entropy).unwrap();

    let blob_a = crate::MemCrypt::encrypt(&a, b"probe").unwrap();
    let blob_b = crate::MemCrypt::decrypt(&b, blob_a.as_slice()).unwrap();
    assert_ne!(blob_b.as_slice(), b"probe");
}

#[test]
fn test_derivation_is_deterministic_given_fixed_entropy() {
    // Same process markers, same seeded entropy => same key, observable
    // through a round trip across the two contexts
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0x11));
    let a = MemCryptContext::new(&entropy).unwrap();
    let b = MemCryptContext::new(&entropy).unwrap();

    let blob = crate::MemCrypt::encrypt(&a, b"stable").unwrap();
    let plain = crate::MemCrypt::decrypt(&b, blob.as_slice()).unwrap();
    assert_eq!(plain.as_slice(), b"stable");
}

#[test]
fn test_entropy_failure_surfaces() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let result = MemCryptContext::new(&entropy);
    assert!(matches!(result, Err(OpaqueError::Entropy(_))));
}

#[test]
fn test_session_key_length() {
    assert_eq!(SESSION_KEY_LENGTH, 32);
}
