// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-scrypt.

use thiserror::Error;

use parapet_buffer::BufferError;

/// Errors raised by SCrypt parameter validation and generation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ScryptError {
    /// Cost parameter N is not a power of two greater than 1.
    #[error("cost parameter N must be > 1 and a power of 2, got {got}")]
    InvalidCost {
        /// Supplied cost.
        got: u32,
    },

    /// With r = 1, N must stay below 65536.
    #[error("cost parameter N must be < 65536 when r = 1, got {got}")]
    CostTooLargeForBlockSize {
        /// Supplied cost.
        got: u32,
    },

    /// Block size r below 1.
    #[error("block size r must be >= 1")]
    InvalidBlockSize,

    /// Parallelism p outside 1..=2^31 / (128 r · 8).
    #[error("parallelism p must be between 1 and {max} for block size {r}, got {got}")]
    InvalidParallelism {
        /// Supplied parallelism.
        got: u32,
        /// Maximum parallelism for the given r.
        max: u32,
        /// Block size the maximum derives from.
        r: u32,
    },

    /// Derived key length below 1 byte.
    #[error("derived key length must be >= 1")]
    OutputTooShort,

    /// Working memory allocation failed.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}
