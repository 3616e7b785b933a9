// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! XSalsa20-Poly1305 authenticated encryption.
//!
//! The one-time Poly1305 key is the first 32 bytes of the XSalsa20
//! keystream for the message's nonce, so MAC keys are never reused
//! across messages. Output format is `ciphertext ‖ 16-byte tag`.
//!
//! [`SecretBox`] is the whole-buffer mode: [`SecretBox::open`] verifies
//! the tag in constant time *before* any plaintext is produced, and
//! returns the plaintext in a fresh
//! [`SecureBuffer`](parapet_buffer::SecureBuffer) the caller must wipe
//! (dropping it wipes too).
//!
//! [`EncryptStream`] / [`DecryptStream`] are the bounded-memory
//! incremental modes.
//!
//! # Example
//!
//! ```rust
//! use parapet_aead::SecretBox;
//!
//! let key = [1u8; 32];
//! let nonce = [2u8; 24];
//!
//! let sealed = SecretBox::seal(&key, &nonce, b"the crown jewels")?;
//! assert_eq!(sealed.len(), 16 + 16);
//!
//! let opened = SecretBox::open(&key, &nonce, &sealed)?;
//! assert_eq!(opened.as_slice(), b"the crown jewels");
//! # Ok::<(), parapet_aead::AeadError>(())
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod poly1305;
mod secretbox;
mod streams;

pub use error::AeadError;
pub use poly1305::Poly1305;
pub use secretbox::SecretBox;
pub use streams::{DecryptStream, EncryptStream};

/// Poly1305 tag length in bytes.
pub const TAG_LENGTH: usize = 16;
/// AEAD key length in bytes.
pub const KEY_LENGTH: usize = 32;
/// AEAD nonce length in bytes.
pub const NONCE_LENGTH: usize = 24;
