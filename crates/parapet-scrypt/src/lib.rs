// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SCrypt memory-hard key derivation per RFC 7914.
//!
//! The lookup tables that make SCrypt memory-hard are chunked so no
//! single allocation exceeds roughly 32 KiB. Every intermediate
//! (expanded blocks, word arrays, chunk tables) is wiped on all exit
//! paths. PBKDF2-HMAC-SHA256 (used at one iteration inside SCrypt) is
//! exported as [`pbkdf2_hmac_sha256`] in its general form.
//!
//! # Example
//!
//! ```rust
//! use parapet_scrypt::{Scrypt, ScryptParameters};
//!
//! let params = ScryptParameters::new(16384, 8, 1, 32)?;
//! let key = Scrypt::generate(&params, b"password", b"salt")?;
//! assert_eq!(key.len(), 32);
//! # Ok::<(), parapet_scrypt::ScryptError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod pbkdf2;
mod scrypt;

pub use error::ScryptError;
pub use pbkdf2::pbkdf2_hmac_sha256;
pub use scrypt::{Scrypt, ScryptParameters};
