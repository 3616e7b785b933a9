// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-aead.

use thiserror::Error;

use parapet_buffer::BufferError;
use parapet_cipher::CipherError;

/// Errors raised by the AEAD construction.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AeadError {
    /// The input is shorter than the 16-byte tag.
    #[error("ciphertext shorter than the authentication tag")]
    CiphertextTooShort,

    /// The Poly1305 tag did not verify. No plaintext is released.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// The underlying stream cipher rejected its parameters.
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Plaintext buffer allocation failed.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}
