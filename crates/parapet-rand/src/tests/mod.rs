// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_buffer::SecureBuffer;

use crate::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::{EntropyError, EntropySource, SystemEntropySource};

#[test]
fn test_fill_bytes_produces_nonzero_output() {
    let entropy = SystemEntropySource {};
    let mut buffer = [0u8; 64];
    entropy.fill_bytes(&mut buffer).unwrap();

    // 64 zero bytes from a healthy CSPRNG is a 2^-512 event
    assert!(buffer.iter().any(|&b| b != 0));
}

#[test]
fn test_fill_secure() {
    let entropy = SystemEntropySource {};
    let mut buffer = SecureBuffer::alloc(32).unwrap();
    entropy.fill_secure(&mut buffer).unwrap();
    assert!(buffer.as_slice().iter().any(|&b| b != 0));
}

#[test]
fn test_consecutive_fills_differ() {
    let entropy = SystemEntropySource {};
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];
    entropy.fill_bytes(&mut a).unwrap();
    entropy.fill_bytes(&mut b).unwrap();
    assert_ne!(a, b);
}

#[test]
fn test_mock_failure() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::FailAlways);
    let mut buffer = [0u8; 8];
    assert_eq!(
        entropy.fill_bytes(&mut buffer),
        Err(EntropyError::EntropyNotAvailable)
    );
    assert_eq!(entropy.call_count(), 1);
}

#[test]
fn test_mock_constant() {
    let entropy = MockEntropySource::new(MockEntropySourceBehaviour::Constant(0xab));
    let mut buffer = [0u8; 8];
    entropy.fill_bytes(&mut buffer).unwrap();
    assert!(buffer.iter().all(|&b| b == 0xab));
}
