// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Fixed-capacity, explicitly zeroable buffers for secret material.
//!
//! Every buffer in this crate lives outside the ordinary allocator-managed
//! heap where the platform allows it: on Unix the backing storage is an
//! anonymous `mmap` region, excluded from core dumps via
//! `madvise(MADV_DONTDUMP)` and pinned with a best-effort `mlock`. On other
//! platforms the storage falls back to a plain allocation that is still
//! wiped on drop.
//!
//! # Buffer Types
//!
//! - [`SecureBuffer`] — mutable byte storage with a fixed capacity.
//! - [`FrozenBuffer`] — the one-way result of [`SecureBuffer::freeze`].
//!   It has no mutating API at all; attempting to write through a frozen
//!   buffer is a compile error rather than a runtime check. The only
//!   write-shaped operation it keeps is [`FrozenBuffer::zero`], the
//!   terminal wipe.
//! - [`SecureChars`], [`SecureInts`], [`SecureLongs`] — typed working
//!   arrays (16/32/64-bit elements) under the same storage and wipe
//!   discipline, used by the cipher and KDF cores for their large
//!   intermediate state.
//!
//! All types wipe their contents unconditionally on drop; `zero()` is
//! idempotent and never fails.
//!
//! # Example
//!
//! ```rust
//! use parapet_buffer::SecureBuffer;
//!
//! let mut key = SecureBuffer::alloc(32)?;
//! key.as_mut_slice().copy_from_slice(&[0x42; 32]);
//!
//! let frozen = key.freeze();
//! assert_eq!(frozen.as_slice()[0], 0x42);
//! // frozen.as_mut_slice(); // does not compile: no mutable access
//! # Ok::<(), parapet_buffer::BufferError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod region;
mod secure_buffer;
mod typed;

pub use error::BufferError;
pub use secure_buffer::{FrozenBuffer, SecureBuffer};
pub use typed::{SecureChars, SecureInts, SecureLongs};
