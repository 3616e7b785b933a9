// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Opaque storage for a byte secret.

use parapet_buffer::SecureBuffer;

use crate::error::OpaqueError;
use crate::memcrypt::MemCrypt;
use crate::session::MemCryptContext;

/// Optional holder of one byte secret, stored only in encrypted form.
///
/// The holder's own storage never contains the plaintext; it exists
/// transiently in buffers returned by [`get`](Self::get), which the
/// caller must wipe (dropping them wipes too).
#[derive(Default)]
pub struct OpaqueBytes {
    encrypted: Option<SecureBuffer>,
}

impl OpaqueBytes {
    /// Creates an empty holder.
    pub fn new() -> Self {
        Self { encrypted: None }
    }

    /// Creates a holder wrapping `plain`, wiping the source.
    pub fn from_value(
        ctx: &MemCryptContext,
        plain: &mut SecureBuffer,
    ) -> Result<Self, OpaqueError> {
        let mut holder = Self::new();
        holder.set(ctx, plain)?;
        Ok(holder)
    }

    /// Returns true if no value is held.
    pub fn is_empty(&self) -> bool {
        self.encrypted.is_none()
    }

    /// Encrypts `plain` and stores the ciphertext, replacing (and
    /// wiping) any previous value. The source buffer is wiped once the
    /// ciphertext exists.
    pub fn set(&mut self, ctx: &MemCryptContext, plain: &mut SecureBuffer) -> Result<(), OpaqueError> {
        let encrypted = MemCrypt::encrypt(ctx, plain.as_slice())?;
        plain.zero();

        self.clear();
        self.encrypted = Some(encrypted);

        Ok(())
    }

    /// Decrypts the held value into a fresh caller-owned buffer.
    ///
    /// Returns `None` if the holder is empty.
    pub fn get(&self, ctx: &MemCryptContext) -> Result<Option<SecureBuffer>, OpaqueError> {
        match &self.encrypted {
            None => Ok(None),
            Some(blob) => Ok(Some(MemCrypt::decrypt(ctx, blob.as_slice())?)),
        }
    }

    /// Deep-copies the ciphertext of another holder, replacing (and
    /// wiping) any previous value. No decryption is involved.
    pub fn set_from(&mut self, other: &OpaqueBytes) -> Result<(), OpaqueError> {
        let copied = match &other.encrypted {
            None => None,
            Some(blob) => Some(blob.try_clone()?),
        };

        self.clear();
        self.encrypted = copied;

        Ok(())
    }

    /// Wipes the held ciphertext and empties the holder.
    pub fn clear(&mut self) {
        if let Some(blob) = &mut self.encrypted {
            blob.zero();
        }
        self.encrypted = None;
    }
}

impl Drop for OpaqueBytes {
    fn drop(&mut self) {
        self.clear();
    }
}

impl core::fmt::Debug for OpaqueBytes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "*")
    }
}
