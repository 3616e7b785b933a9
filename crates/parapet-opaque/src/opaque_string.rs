// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Opaque storage for textual secrets (passwords, passphrases).

use zeroize::Zeroize;

use parapet_buffer::{SecureBuffer, SecureChars};

use crate::error::OpaqueError;
use crate::opaque_bytes::OpaqueBytes;
use crate::session::MemCryptContext;

/// Optional holder of one textual secret, stored only in encrypted form.
///
/// Text goes in as UTF-8 and comes back either as the raw UTF-8 bytes
/// ([`get`](Self::get)) or as wipeable UTF-16 code units
/// ([`get_chars`](Self::get_chars)) for KDFs that consume character
/// passwords.
#[derive(Default, Debug)]
pub struct OpaqueString {
    inner: OpaqueBytes,
}

impl OpaqueString {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self {
            inner: OpaqueBytes::new(),
        }
    }

    /// Returns true if no value is held.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Encrypts and stores the string, wiping the source.
    pub fn set(&mut self, ctx: &MemCryptContext, text: &mut String) -> Result<(), OpaqueError> {
        let mut plain = SecureBuffer::from_slice(text.as_bytes())?;
        text.zeroize();

        self.inner.set(ctx, &mut plain)
    }

    /// Decrypts the held text into a fresh UTF-8 byte buffer.
    pub fn get(&self, ctx: &MemCryptContext) -> Result<Option<SecureBuffer>, OpaqueError> {
        self.inner.get(ctx)
    }

    /// Decrypts the held text into UTF-16 code units.
    ///
    /// # Panics
    ///
    /// Panics if the stored bytes are not valid UTF-8, which cannot
    /// happen for values stored through [`set`](Self::set).
    pub fn get_chars(&self, ctx: &MemCryptContext) -> Result<Option<SecureChars>, OpaqueError> {
        let Some(mut bytes) = self.inner.get(ctx)? else {
            return Ok(None);
        };

        let text = core::str::from_utf8(bytes.as_slice()).expect("opaque string holds valid UTF-8");

        // Worst case one u16 unit per byte; track the used prefix
        let mut units = SecureChars::alloc(bytes.len())?;
        let mut used = 0;
        let mut pair = [0u16; 2];
        for ch in text.chars() {
            for unit in ch.encode_utf16(&mut pair) {
                units.set(used, *unit);
                used += 1;
            }
        }
        pair.zeroize();
        bytes.zero();

        let chars = SecureChars::from_slice(&units.as_slice()[..used])?;
        units.zero();

        Ok(Some(chars))
    }

    /// Wipes the held ciphertext and empties the holder.
    pub fn clear(&mut self) {
        self.inner.clear();
    }
}
