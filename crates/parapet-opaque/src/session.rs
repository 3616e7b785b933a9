// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Per-process session key for at-rest encryption.

use std::sync::OnceLock;

use zeroize::Zeroize;

use parapet_buffer::{FrozenBuffer, SecureBuffer};
use parapet_digest::{Blake2b, Digest};
use parapet_rand::{EntropySource, SystemEntropySource};
use parapet_util::u32_to_be;

use crate::SESSION_KEY_LENGTH;
use crate::error::OpaqueError;

// Distinct link-time anchors; their ASLR-randomized addresses serve as
// per-process identity markers.
static ANCHOR_A: u8 = 0xa5;
static ANCHOR_B: u16 = 0x5a5a;

static GLOBAL: OnceLock<MemCryptContext> = OnceLock::new();

/// Holder of the per-process session key.
///
/// The key is derived once from four bytes of boot-time randomness and
/// three big-endian 32-bit process-identity markers (the process id and
/// two ASLR-derived static addresses): stable for the process lifetime,
/// different across processes, never persisted. It keys only the at-rest
/// encryption of opaque values.
///
/// Per the one-time-initialization contract, obtain the shared instance
/// through [`global`](Self::global) and pass `&MemCryptContext` down to
/// the call sites that need it; constructing additional contexts is
/// possible (e.g. for tests) but values encrypted under one context
/// cannot be decrypted under another.
pub struct MemCryptContext {
    session_key: FrozenBuffer,
}

impl MemCryptContext {
    /// Derives a fresh context from the given entropy source.
    pub fn new(entropy: &dyn EntropySource) -> Result<Self, OpaqueError> {
        let mut digest = Blake2b::new(SESSION_KEY_LENGTH)
            .expect("infallible: session key width is a valid Blake2b width");

        let mut seed = [0u8; 4];
        entropy.fill_bytes(&mut seed)?;
        for byte in seed {
            digest.update(&[byte]);
        }
        seed.zeroize();

        let mut word = [0u8; 4];
        for marker in [process_marker(), anchor_marker_a(), anchor_marker_b()] {
            u32_to_be(marker, &mut word);
            digest.update(&word);
        }

        let mut key = SecureBuffer::alloc(SESSION_KEY_LENGTH)?;
        digest.finalize_into(key.as_mut_slice());

        Ok(Self {
            session_key: key.freeze(),
        })
    }

    /// Returns the lazily-initialized process-wide context.
    ///
    /// The first caller derives the session key (guarded, exactly once);
    /// later callers reuse it. If two threads race on the first call,
    /// the losing derivation is wiped and discarded.
    pub fn global() -> Result<&'static Self, OpaqueError> {
        if let Some(ctx) = GLOBAL.get() {
            return Ok(ctx);
        }

        let ctx = Self::new(&SystemEntropySource {})?;
        Ok(GLOBAL.get_or_init(|| ctx))
    }

    /// The 256-bit session key.
    pub(crate) fn session_key(&self) -> &FrozenBuffer {
        &self.session_key
    }
}

impl core::fmt::Debug for MemCryptContext {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "MemCryptContext {{ [protected] }}")
    }
}

fn process_marker() -> u32 {
    std::process::id()
}

fn anchor_marker_a() -> u32 {
    core::ptr::from_ref(&ANCHOR_A) as usize as u32
}

fn anchor_marker_b() -> u32 {
    core::ptr::from_ref(&ANCHOR_B) as usize as u32
}
