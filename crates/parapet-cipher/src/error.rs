// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-cipher.

use thiserror::Error;

/// Errors raised by the stream cipher engines.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum CipherError {
    /// The key is not one of the supported lengths.
    #[error("key must be 128 or 256 bits, got {got} bytes")]
    InvalidKeyLength {
        /// Supplied key length in bytes.
        got: usize,
    },

    /// The nonce does not match the engine's required length.
    #[error("nonce must be exactly {expected} bytes, got {got}")]
    InvalidNonceLength {
        /// Required nonce length in bytes.
        expected: usize,
        /// Supplied nonce length in bytes.
        got: usize,
    },

    /// The engine was used before a first keyed initialization.
    #[error("cipher not initialised")]
    NotInitialized,

    /// A key is required here; nonce-only re-initialization is not
    /// supported by this engine.
    #[error("re-init without a key is not supported")]
    KeyRequired,

    /// The 2^70-byte-per-nonce processing limit would be exceeded.
    #[error("2^70 byte limit per nonce exceeded; change the nonce")]
    MaxBytesExceeded,

    /// A backwards skip attempted to move before keystream position zero.
    #[error("attempt to reduce counter past zero")]
    CounterUnderflow,

    /// The output buffer is shorter than the input.
    #[error("output buffer too short: need {needed}, got {got}")]
    OutputTooShort {
        /// Required output length in bytes.
        needed: usize,
        /// Supplied output length in bytes.
        got: usize,
    },
}
