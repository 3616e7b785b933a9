// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// OS-level entropy source backed by `getrandom`.
///
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `BCryptGenRandom`
/// - WASI: `random_get`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropySource {}

impl EntropySource for SystemEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        getrandom::fill(dest).map_err(|_| EntropyError::EntropyNotAvailable)
    }
}
