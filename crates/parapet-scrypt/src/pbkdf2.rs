// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2-HMAC-SHA256 per RFC 8018.

use zeroize::Zeroize;

use parapet_digest::{Hmac, Sha256};
use parapet_util::u32_to_be;

const HASH_LENGTH: usize = 32;

/// Derives `out.len()` bytes from `password` and `salt` with the given
/// iteration count.
///
/// SCrypt invokes this with a single iteration; the general iterated
/// form is implemented because the primitive is independent of its
/// caller. `iterations` must be at least 1.
pub fn pbkdf2_hmac_sha256(password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) {
    debug_assert!(iterations >= 1);

    let mut mac = Hmac::new(Sha256::new(), password);

    let mut u = [0u8; HASH_LENGTH];
    let mut accum = [0u8; HASH_LENGTH];
    let mut counter = [0u8; 4];

    let mut block_index = 1u32;
    let mut pos = 0;

    while pos < out.len() {
        // U1 = PRF(P, S ‖ INT(i)), big-endian block counter
        u32_to_be(block_index, &mut counter);
        mac.update(salt);
        mac.update(&counter);
        mac.finalize_into(&mut u);
        accum.copy_from_slice(&u);

        for _ in 1..iterations {
            mac.update(&u);
            mac.finalize_into(&mut u);
            for (t, v) in accum.iter_mut().zip(u.iter()) {
                *t ^= v;
            }
        }

        let take = core::cmp::min(HASH_LENGTH, out.len() - pos);
        out[pos..pos + take].copy_from_slice(&accum[..take]);
        pos += take;
        block_index += 1;
    }

    u.zeroize();
    accum.zeroize();
}
