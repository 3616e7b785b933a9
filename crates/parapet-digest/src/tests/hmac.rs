// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_util::hex_to_bytes;

use crate::{Hmac, Sha256};

fn hmac_sha256(key: &[u8], data: &[u8]) -> [u8; 32] {
    let mut mac = Hmac::new(Sha256::new(), key);
    mac.update(data);
    let mut out = [0u8; 32];
    mac.finalize_into(&mut out);
    out
}

/// RFC 4231 Test Case 1
#[test]
fn test_rfc4231_case_1() {
    assert_eq!(
        hmac_sha256(&[0x0b; 20], b"Hi There").to_vec(),
        hex_to_bytes("b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7")
    );
}

/// RFC 4231 Test Case 2
#[test]
fn test_rfc4231_case_2() {
    assert_eq!(
        hmac_sha256(b"Jefe", b"what do ya want for nothing?").to_vec(),
        hex_to_bytes("5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843")
    );
}

/// RFC 4231 Test Case 3
#[test]
fn test_rfc4231_case_3() {
    assert_eq!(
        hmac_sha256(&[0xaa; 20], &[0xdd; 50]).to_vec(),
        hex_to_bytes("773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe")
    );
}

/// RFC 4231 Test Case 6 (key longer than block, hashed first)
#[test]
fn test_rfc4231_case_6() {
    assert_eq!(
        hmac_sha256(
            &[0xaa; 131],
            b"Test Using Larger Than Block-Size Key - Hash Key First"
        )
        .to_vec(),
        hex_to_bytes("60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54")
    );
}

#[test]
fn test_reuse_after_finalize() {
    let mut mac = Hmac::new(Sha256::new(), b"Jefe");
    mac.update(b"junk that gets finalized");
    let mut out = [0u8; 32];
    mac.finalize_into(&mut out);

    mac.update(b"what do ya want for nothing?");
    mac.finalize_into(&mut out);
    assert_eq!(out, hmac_sha256(b"Jefe", b"what do ya want for nothing?"));
}

#[test]
fn test_reset_discards_partial_message() {
    let mut mac = Hmac::new(Sha256::new(), b"Jefe");
    mac.update(b"partial ");
    mac.reset();
    mac.update(b"what do ya want for nothing?");
    let mut out = [0u8; 32];
    mac.finalize_into(&mut out);
    assert_eq!(out, hmac_sha256(b"Jefe", b"what do ya want for nothing?"));
}
