// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Whole-buffer XSalsa20-Poly1305: `seal` / `open`.

use alloc::vec;
use alloc::vec::Vec;

use zeroize::Zeroize;

use parapet_buffer::SecureBuffer;
use parapet_cipher::XSalsa20;
use parapet_util::constant_time_eq;

use crate::error::AeadError;
use crate::poly1305::Poly1305;
use crate::{KEY_LENGTH, TAG_LENGTH};

/// Initializes the cipher and derives the one-time Poly1305 key from the
/// first 32 keystream bytes. Data processing continues from keystream
/// position 32.
pub(crate) fn keyed_parts(key: &[u8], nonce: &[u8]) -> Result<(XSalsa20, Poly1305), AeadError> {
    let mut cipher = XSalsa20::new();
    cipher.init(Some(key), nonce)?;

    let mut mac_key = [0u8; KEY_LENGTH];
    cipher.process_in_place(&mut mac_key)?;
    let mac = Poly1305::new(&mac_key);
    mac_key.zeroize();

    Ok((cipher, mac))
}

/// Whole-buffer XSalsa20-Poly1305.
///
/// `open` recomputes the tag over the received ciphertext and compares
/// in constant time before a single byte is decrypted; a mismatch
/// releases no plaintext.
pub struct SecretBox;

impl SecretBox {
    /// Encrypts `plaintext`, returning `ciphertext ‖ 16-byte tag`.
    ///
    /// Sealing an empty plaintext yields exactly the 16-byte tag.
    pub fn seal(key: &[u8], nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, AeadError> {
        let (mut cipher, mut mac) = keyed_parts(key, nonce)?;

        let mut out = vec![0u8; plaintext.len() + TAG_LENGTH];
        let (body, tag) = out.split_at_mut(plaintext.len());

        cipher.process(plaintext, body)?;
        mac.update(body);
        mac.finalize_into(tag.try_into().expect("tag slice is exactly 16 bytes"));

        cipher.zero();

        Ok(out)
    }

    /// Verifies and decrypts `ciphertext_with_tag`.
    ///
    /// The plaintext comes back in a fresh [`SecureBuffer`]; dropping it
    /// wipes it, and callers holding it longer should call `zero()`
    /// themselves when done.
    pub fn open(
        key: &[u8],
        nonce: &[u8],
        ciphertext_with_tag: &[u8],
    ) -> Result<SecureBuffer, AeadError> {
        if ciphertext_with_tag.len() < TAG_LENGTH {
            return Err(AeadError::CiphertextTooShort);
        }

        let body_len = ciphertext_with_tag.len() - TAG_LENGTH;
        let (body, received_tag) = ciphertext_with_tag.split_at(body_len);

        let (mut cipher, mut mac) = keyed_parts(key, nonce)?;

        let mut expected_tag = [0u8; TAG_LENGTH];
        mac.update(body);
        mac.finalize_into(&mut expected_tag);

        if !constant_time_eq(&expected_tag, received_tag) {
            expected_tag.zeroize();
            cipher.zero();
            return Err(AeadError::AuthenticationFailed);
        }
        expected_tag.zeroize();

        let mut plaintext = SecureBuffer::alloc(body_len)?;
        cipher.process(body, plaintext.as_mut_slice())?;
        cipher.zero();

        Ok(plaintext)
    }
}
