// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Argon2 memory-hard key derivation per RFC 9106.
//!
//! All three variants are implemented: Argon2d (data-dependent
//! addressing), Argon2i (data-independent) and Argon2id (hybrid), at
//! versions 0x10 and 0x13. The working memory, the part an attacker
//! must pay for, lives in [`SecureLongs`](parapet_buffer::SecureLongs)
//! and is wiped after every derivation and on drop.
//!
//! # Example
//!
//! ```rust
//! use parapet_argon2::{Argon2, Argon2Parameters, Argon2Variant};
//! use parapet_buffer::FrozenBuffer;
//!
//! let params = Argon2Parameters::builder(Argon2Variant::Argon2id)
//!     .with_salt(FrozenBuffer::from_slice(b"somesalt16bytes!").unwrap())
//!     .with_memory_kib(64)
//!     .with_iterations(2)
//!     .with_parallelism(2)
//!     .build()?;
//!
//! let mut argon2 = Argon2::new(params)?;
//! let mut key = [0u8; 32];
//! argon2.generate(b"password", &mut key)?;
//! # Ok::<(), parapet_argon2::Argon2Error>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod generator;
mod params;

pub use error::Argon2Error;
pub use generator::Argon2;
pub use params::{Argon2Parameters, Argon2ParametersBuilder, Argon2Variant, Argon2Version};
