// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-opaque.

use thiserror::Error;

use parapet_buffer::BufferError;
use parapet_cipher::CipherError;
use parapet_rand::EntropyError;

/// Errors raised by the at-rest encryption layer.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum OpaqueError {
    /// An at-rest blob is shorter than its leading nonce.
    #[error("encrypted blob shorter than the {expected}-byte nonce")]
    TruncatedBlob {
        /// Required minimum length in bytes.
        expected: usize,
    },

    /// Entropy for a fresh nonce or the session key was unavailable.
    #[error("entropy error: {0}")]
    Entropy(#[from] EntropyError),

    /// The stream cipher rejected its parameters.
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),

    /// Buffer allocation failed.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}
