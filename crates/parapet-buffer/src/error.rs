// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for parapet-buffer.

use thiserror::Error;

/// Errors that can occur when allocating or slicing buffers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum BufferError {
    /// The backing region could not be mapped.
    #[error("mmap failed")]
    Map,

    /// A requested sub-range does not fit inside the source buffer.
    #[error("range {offset}..{offset}+{len} out of bounds for buffer of length {buffer_len}")]
    RangeOutOfBounds {
        /// Start of the requested range.
        offset: usize,
        /// Length of the requested range.
        len: usize,
        /// Length of the buffer the range was applied to.
        buffer_len: usize,
    },
}
