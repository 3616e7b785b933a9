// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! At-rest encryption for secrets resident in process memory.
//!
//! A secret held for a long time should not sit in plaintext, even in a
//! locked page: it stays visible to debugger sessions, core dumps and
//! casual memory inspection.
//! [`OpaqueBytes`] and [`OpaqueString`] store only the XSalsa20-encrypted
//! form and decrypt on demand into fresh
//! [`SecureBuffer`](parapet_buffer::SecureBuffer)s.
//!
//! The key is a per-process [`MemCryptContext`] session key, derived once
//! from boot-time randomness and process-identity markers. It is never
//! persisted and never derived from user secrets. This is *not* a
//! security boundary against an attacker holding a full memory dump plus
//! code execution; it defends against passive inspection and swapped-out
//! pages.
//!
//! The at-rest blob format is `nonce(24) ‖ ciphertext` with no
//! authentication tag: the layer defends confidentiality against
//! inspection, not integrity against a tampering attacker who could
//! equally well patch the process.
//!
//! # Example
//!
//! ```rust
//! use parapet_buffer::SecureBuffer;
//! use parapet_opaque::{MemCryptContext, OpaqueBytes};
//!
//! let ctx = MemCryptContext::global()?;
//!
//! let mut secret = SecureBuffer::from_slice(b"api key")?;
//! let mut opaque = OpaqueBytes::new();
//! opaque.set(ctx, &mut secret)?;
//! // `secret` has been wiped; only ciphertext is resident now
//!
//! let mut recovered = opaque.get(ctx)?.expect("value present");
//! assert_eq!(recovered.as_slice(), b"api key");
//! recovered.zero();
//! # Ok::<(), parapet_opaque::OpaqueError>(())
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod memcrypt;
mod opaque_bytes;
mod opaque_string;
mod session;

pub use error::OpaqueError;
pub use memcrypt::MemCrypt;
pub use opaque_bytes::OpaqueBytes;
pub use opaque_string::OpaqueString;
pub use session::MemCryptContext;

/// Session key length in bytes (Blake2b-256 output).
pub const SESSION_KEY_LENGTH: usize = 32;
