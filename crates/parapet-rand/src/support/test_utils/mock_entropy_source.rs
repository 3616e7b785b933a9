// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (delegates to the real entropy source).
    None,
    /// Always fail fill_bytes.
    FailAlways,
    /// Deterministic output: every byte is the given value.
    Constant(u8),
}

/// Mock entropy source for testing.
///
/// Wraps [`SystemEntropySource`] but allows simulating failures and
/// deterministic output via [`MockEntropySourceBehaviour`].
pub struct MockEntropySource {
    inner: SystemEntropySource,
    behaviour: MockEntropySourceBehaviour,
    fill_bytes_count: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: SystemEntropySource {},
            behaviour,
            fill_bytes_count: Cell::new(0),
        }
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.fill_bytes_count.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.fill_bytes_count.set(self.fill_bytes_count.get() + 1);

        match self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::Constant(value) => {
                dest.fill(value);
                Ok(())
            }
        }
    }
}
