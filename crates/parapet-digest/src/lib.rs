// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Digest and MAC primitives for the Parapet crates.
//!
//! The algorithm set is closed: [`Blake2b`] (variable output width),
//! [`Sha256`], and [`Hmac`] built generically over the sealed [`Digest`]
//! trait. There is no registry and no plugin surface; the KDF and
//! session-key layers consume exactly these.
//!
//! All working state (message schedules, chaining values, pads) lives in
//! structs that are zeroized on drop and on `reset`.
//!
//! # Example
//!
//! ```rust
//! use parapet_digest::{Blake2b, Digest};
//!
//! let mut digest = Blake2b::new(32)?;
//! digest.update(b"abc");
//!
//! let mut out = [0u8; 32];
//! digest.finalize_into(&mut out);
//! # Ok::<(), parapet_digest::DigestError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod blake2b;
mod error;
mod hmac;
mod sha256;
mod traits;

pub use blake2b::Blake2b;
pub use error::DigestError;
pub use hmac::Hmac;
pub use sha256::Sha256;
pub use traits::Digest;
