// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-argon2.

use thiserror::Error;

use parapet_buffer::BufferError;

/// Errors raised by Argon2 parameter validation and generation.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum Argon2Error {
    /// Lanes (parallelism) outside 1..=2^24-1.
    #[error("lanes must be between 1 and {max}, got {got}")]
    InvalidLanes {
        /// Supplied lane count.
        got: u32,
        /// Maximum lane count.
        max: u32,
    },

    /// Memory below the 2-blocks-per-lane minimum.
    #[error("memory must be at least {min} KiB for {lanes} lanes, got {got}")]
    InvalidMemory {
        /// Supplied memory in KiB.
        got: u32,
        /// Required minimum in KiB.
        min: u32,
        /// Lane count the minimum derives from.
        lanes: u32,
    },

    /// Fewer than one iteration.
    #[error("iterations must be at least 1")]
    InvalidIterations,

    /// Requested output below the 4-byte minimum.
    #[error("output length must be at least {min} bytes, got {got}")]
    OutputTooShort {
        /// Requested output length.
        got: usize,
        /// Minimum output length.
        min: usize,
    },

    /// Working memory allocation failed.
    #[error("buffer error: {0}")]
    Buffer(#[from] BufferError),
}
