// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The at-rest encryption mechanism behind the opaque value types.

use parapet_buffer::SecureBuffer;
use parapet_cipher::{XSALSA20_NONCE_LENGTH, XSalsa20};
use parapet_rand::{EntropySource, SystemEntropySource};

use crate::error::OpaqueError;
use crate::session::MemCryptContext;

/// XSalsa20 encryption of values sitting in memory, keyed by the
/// process session key.
///
/// Blob format: `nonce(24) ‖ ciphertext(len(plain))`, no tag. This is a
/// process-internal representation, never a wire format.
pub struct MemCrypt;

impl MemCrypt {
    /// Encrypts `plain` under a fresh random nonce.
    pub fn encrypt(ctx: &MemCryptContext, plain: &[u8]) -> Result<SecureBuffer, OpaqueError> {
        let mut out = SecureBuffer::alloc(XSALSA20_NONCE_LENGTH + plain.len())?;

        let entropy = SystemEntropySource {};
        entropy.fill_bytes(&mut out.as_mut_slice()[..XSALSA20_NONCE_LENGTH])?;

        let mut cipher = XSalsa20::new();
        let (nonce, body) = out.as_mut_slice().split_at_mut(XSALSA20_NONCE_LENGTH);
        cipher.init(Some(ctx.session_key().as_slice()), nonce)?;
        cipher.process(plain, body)?;
        cipher.zero();

        Ok(out)
    }

    /// Decrypts a blob produced by [`encrypt`](Self::encrypt).
    ///
    /// The caller owns the returned buffer and is responsible for wiping
    /// it (dropping it wipes as well).
    pub fn decrypt(ctx: &MemCryptContext, blob: &[u8]) -> Result<SecureBuffer, OpaqueError> {
        if blob.len() < XSALSA20_NONCE_LENGTH {
            return Err(OpaqueError::TruncatedBlob {
                expected: XSALSA20_NONCE_LENGTH,
            });
        }

        let (nonce, body) = blob.split_at(XSALSA20_NONCE_LENGTH);
        let mut out = SecureBuffer::alloc(body.len())?;

        // Salsa-family ciphers are involutive: decryption is the same
        // keystream XOR.
        let mut cipher = XSalsa20::new();
        cipher.init(Some(ctx.session_key().as_slice()), nonce)?;
        cipher.process(body, out.as_mut_slice())?;
        cipher.zero();

        Ok(out)
    }
}
