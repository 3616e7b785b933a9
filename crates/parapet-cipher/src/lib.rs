// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Salsa20 and XSalsa20 stream ciphers (Snuffle 2005).
//!
//! Encryption and decryption are the same XOR-against-keystream
//! operation. Both engines support random access into the keystream via
//! [`Salsa20::skip`] / [`Salsa20::seek_to`] and enforce the 2^70-byte
//! per-nonce processing limit.
//!
//! The raw [`salsa_core`] permutation is exported for the SCrypt
//! BlockMix step, which runs it at 8 rounds over its own word arrays.
//!
//! Engine state (key schedule, keystream window, counters) is zeroized
//! on drop; [`Salsa20::zero`] wipes it eagerly.
//!
//! # Example
//!
//! ```rust
//! use parapet_cipher::XSalsa20;
//!
//! let key = [7u8; 32];
//! let nonce = [3u8; 24];
//!
//! let mut cipher = XSalsa20::new();
//! cipher.init(Some(&key), &nonce)?;
//!
//! let mut data = *b"attack at dawn";
//! cipher.process_in_place(&mut data)?;
//!
//! cipher.init(Some(&key), &nonce)?;
//! cipher.process_in_place(&mut data)?;
//! assert_eq!(&data, b"attack at dawn");
//! # Ok::<(), parapet_cipher::CipherError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod core_fn;
mod error;
mod salsa20;
mod xsalsa20;

pub use core_fn::salsa_core;
pub use error::CipherError;
pub use salsa20::Salsa20;
pub use xsalsa20::XSalsa20;

/// Key length selecting the 128-bit constant set.
pub const KEY_LENGTH_128: usize = 16;
/// Key length selecting the 256-bit constant set.
pub const KEY_LENGTH_256: usize = 32;
/// Salsa20 nonce length in bytes.
pub const SALSA20_NONCE_LENGTH: usize = 8;
/// XSalsa20 nonce length in bytes.
pub const XSALSA20_NONCE_LENGTH: usize = 24;
