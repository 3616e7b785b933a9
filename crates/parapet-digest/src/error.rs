// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-digest.

use thiserror::Error;

/// Errors raised by digest construction.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum DigestError {
    /// The requested output width is outside the algorithm's range.
    #[error("digest output length {requested} out of range 1..={max}")]
    InvalidOutputLength {
        /// Requested output length in bytes.
        requested: usize,
        /// Maximum supported output length in bytes.
        max: usize,
    },

    /// The supplied key is longer than the algorithm permits.
    #[error("key length {requested} exceeds maximum {max}")]
    KeyTooLong {
        /// Supplied key length in bytes.
        requested: usize,
        /// Maximum supported key length in bytes.
        max: usize,
    },
}
