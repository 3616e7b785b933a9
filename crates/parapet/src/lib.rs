// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Cryptographic primitives that keep secrets out of ordinary memory.</em></p>
//!
//! ---
//!
//! Parapet is a fixed, closed set of cryptographic primitives rebuilt
//! around one discipline: secret material lives in explicitly zeroable,
//! off-heap buffers, and every intermediate is wiped on every exit path.
//!
//! # What's inside
//!
//! - 🧱 **Secure buffers** — fixed-capacity, page-locked where the OS
//!   allows, wiped on drop; one-way freezing makes immutability a type,
//!   not a flag ([`buffer`])
//! - 🔐 **Opaque values** — secrets resident in memory stay encrypted at
//!   rest under a per-process session key ([`opaque`])
//! - 🌀 **Salsa20 / XSalsa20** — skippable stream ciphers with the
//!   2^70-byte nonce discipline ([`cipher`])
//! - 🧾 **XSalsa20-Poly1305** — authenticated encryption, whole-buffer
//!   and streaming ([`aead`])
//! - 🐢 **Argon2 & SCrypt** — memory-hard key derivation over securely
//!   stored working memory ([`argon2`], [`scrypt`])
//! - #️⃣ **Blake2b, SHA-256, HMAC** — the closed digest set the rest
//!   consumes ([`digest`])
//!
//! This is not a general-purpose cryptography toolkit: there is no
//! algorithm registry, no TLS, no pluggable providers.
//!
//! # Quick Start
//!
//! ```rust
//! use parapet::buffer::SecureBuffer;
//! use parapet::opaque::{MemCryptContext, OpaqueBytes};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let ctx = MemCryptContext::global()?;
//!
//!     let mut master_key = SecureBuffer::from_slice(b"derived elsewhere")?;
//!     let mut opaque = OpaqueBytes::from_value(ctx, &mut master_key)?;
//!     // `master_key` is wiped; only ciphertext is resident
//!
//!     let mut plain = opaque.get(ctx)?.expect("value present");
//!     // ... use plain.as_slice() ...
//!     plain.zero();
//!
//!     opaque.clear();
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Authenticated encryption (XSalsa20-Poly1305).
pub mod aead {
    pub use parapet_aead::*;
}

/// Argon2 memory-hard key derivation.
pub mod argon2 {
    pub use parapet_argon2::*;
}

/// Secure buffer types.
pub mod buffer {
    pub use parapet_buffer::*;
}

/// Salsa20 and XSalsa20 stream ciphers.
pub mod cipher {
    pub use parapet_cipher::*;
}

/// Blake2b, SHA-256 and HMAC.
pub mod digest {
    pub use parapet_digest::*;
}

/// At-rest encryption of resident secrets.
pub mod opaque {
    pub use parapet_opaque::*;
}

/// Entropy sources.
pub mod rand {
    pub use parapet_rand::*;
}

/// SCrypt memory-hard key derivation.
pub mod scrypt {
    pub use parapet_scrypt::*;
}

/// Byte-order and constant-time helpers.
pub mod util {
    pub use parapet_util::*;
}
