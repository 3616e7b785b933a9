// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Incremental XSalsa20-Poly1305 (bounded-memory streaming).

use zeroize::Zeroize;

use parapet_cipher::XSalsa20;

use crate::TAG_LENGTH;
use crate::error::AeadError;
use crate::poly1305::Poly1305;
use crate::secretbox::keyed_parts;

/// Incremental encryption: chunks are encrypted in place and folded into
/// the MAC; [`finalize`](Self::finalize) produces the trailing tag.
///
/// The concatenated output chunks followed by the tag are exactly what
/// [`SecretBox::seal`](crate::SecretBox::seal) would have produced.
pub struct EncryptStream {
    cipher: XSalsa20,
    mac: Poly1305,
}

impl EncryptStream {
    /// Starts an encryption stream under `key` / `nonce`.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, AeadError> {
        let (cipher, mac) = keyed_parts(key, nonce)?;
        Ok(Self { cipher, mac })
    }

    /// Encrypts the chunk in place and absorbs the ciphertext into the MAC.
    pub fn update_in_place(&mut self, chunk: &mut [u8]) -> Result<(), AeadError> {
        self.cipher.process_in_place(chunk)?;
        self.mac.update(chunk);
        Ok(())
    }

    /// Finishes the stream, emitting the 16-byte tag and wiping state.
    pub fn finalize(mut self) -> [u8; TAG_LENGTH] {
        let mut tag = [0u8; TAG_LENGTH];
        self.mac.finalize_into(&mut tag);
        self.cipher.zero();
        tag
    }
}

/// Incremental decryption: chunks are folded into the MAC and decrypted
/// in place; [`finalize`](Self::finalize) verifies the trailing tag.
///
/// Unlike [`SecretBox::open`](crate::SecretBox::open), plaintext chunks
/// are handed back before the tag has been seen. Callers must treat all
/// output as unauthenticated until `finalize` succeeds, and wipe it if
/// `finalize` fails.
pub struct DecryptStream {
    cipher: XSalsa20,
    mac: Poly1305,
}

impl DecryptStream {
    /// Starts a decryption stream under `key` / `nonce`.
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, AeadError> {
        let (cipher, mac) = keyed_parts(key, nonce)?;
        Ok(Self { cipher, mac })
    }

    /// Absorbs the ciphertext chunk into the MAC, then decrypts it in place.
    pub fn update_in_place(&mut self, chunk: &mut [u8]) -> Result<(), AeadError> {
        self.mac.update(chunk);
        self.cipher.process_in_place(chunk)?;
        Ok(())
    }

    /// Verifies the received tag against the absorbed ciphertext.
    pub fn finalize(mut self, received_tag: &[u8; TAG_LENGTH]) -> Result<(), AeadError> {
        let mut expected_tag = [0u8; TAG_LENGTH];
        self.mac.finalize_into(&mut expected_tag);
        self.cipher.zero();

        let ok = parapet_util::constant_time_eq(&expected_tag, received_tag);
        expected_tag.zeroize();

        if ok {
            Ok(())
        } else {
            Err(AeadError::AuthenticationFailed)
        }
    }
}
