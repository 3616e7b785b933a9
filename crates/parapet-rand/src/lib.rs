// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # parapet_rand
//!
//! Cryptographically secure random number generation for the Parapet crates.
//!
//! Provides the entropy behind MemCrypt nonces and KDF salts.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Example
//!
//! ```rust
//! use parapet_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut nonce = [0u8; 24];
//! entropy.fill_bytes(&mut nonce).expect("entropy unavailable");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
