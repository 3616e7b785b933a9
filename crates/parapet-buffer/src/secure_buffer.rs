// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte buffers: mutable [`SecureBuffer`] and one-way [`FrozenBuffer`].

use zeroize::Zeroize;

use crate::error::BufferError;
use crate::region::Region;

/// Fixed-capacity mutable byte storage outside the ordinary heap.
///
/// The capacity is fixed at allocation and never grows. Contents are
/// wiped on drop. [`freeze`](Self::freeze) converts the buffer into a
/// [`FrozenBuffer`], which permanently removes mutable access.
pub struct SecureBuffer {
    region: Region<u8>,
}

impl SecureBuffer {
    /// Allocates a zero-initialized buffer of exactly `len` bytes.
    pub fn alloc(len: usize) -> Result<Self, BufferError> {
        Ok(Self {
            region: Region::alloc(len)?,
        })
    }

    /// Allocates a buffer holding a copy of `src`.
    ///
    /// The source slice is not consumed; callers holding secrets in `src`
    /// are responsible for wiping it.
    pub fn from_slice(src: &[u8]) -> Result<Self, BufferError> {
        let mut buffer = Self::alloc(src.len())?;
        buffer.as_mut_slice().copy_from_slice(src);
        Ok(buffer)
    }

    /// Returns the buffer length in bytes.
    pub fn len(&self) -> usize {
        self.region.as_slice().len()
    }

    /// Returns true if the buffer has zero length.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn get(&self, index: usize) -> u8 {
        self.region.as_slice()[index]
    }

    /// Sets the byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn set(&mut self, index: usize, value: u8) {
        self.region.as_mut_slice()[index] = value;
    }

    /// Fills the entire buffer with `value`.
    pub fn fill(&mut self, value: u8) {
        self.region.as_mut_slice().fill(value);
    }

    /// Copies `len` bytes from `src[src_off..]` to `self[dst_off..]`.
    ///
    /// # Panics
    ///
    /// Panics if either range is out of bounds; nothing is copied then.
    pub fn copy_from(&mut self, src: &[u8], src_off: usize, len: usize, dst_off: usize) {
        let src = &src[src_off..src_off + len];
        self.region.as_mut_slice()[dst_off..dst_off + len].copy_from_slice(src);
    }

    /// Read-only view of the contents.
    pub fn as_slice(&self) -> &[u8] {
        self.region.as_slice()
    }

    /// Mutable view of the contents.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        self.region.as_mut_slice()
    }

    /// Overwrites every byte with 0. Idempotent; the length is unchanged.
    pub fn zero(&mut self) {
        self.region.zero();
    }

    /// Returns true if the backing pages are pinned with `mlock`.
    pub fn is_locked(&self) -> bool {
        self.region.is_locked()
    }

    /// Makes the buffer permanently read-only.
    ///
    /// One-way: there is no thaw. A mutable copy can still be obtained
    /// with [`FrozenBuffer::to_secure`], which deep-copies the bytes.
    pub fn freeze(self) -> FrozenBuffer {
        FrozenBuffer { inner: self }
    }

    /// Deep copy. The copy is independent and starts mutable.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        Self::from_slice(self.as_slice())
    }
}

impl Zeroize for SecureBuffer {
    fn zeroize(&mut self) {
        self.zero();
    }
}

impl core::fmt::Debug for SecureBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SecureBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}

/// Permanently read-only byte storage produced by [`SecureBuffer::freeze`].
///
/// Mutation is removed at the type level; the only write-shaped operation
/// is [`zero`](Self::zero), the terminal wipe, which stays available
/// because disposal must always be possible.
pub struct FrozenBuffer {
    inner: SecureBuffer,
}

impl FrozenBuffer {
    /// Allocates a frozen buffer holding a copy of `src`.
    pub fn from_slice(src: &[u8]) -> Result<Self, BufferError> {
        Ok(SecureBuffer::from_slice(src)?.freeze())
    }

    /// Returns the buffer length in bytes.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the buffer has zero length.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the byte at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like slice indexing.
    pub fn get(&self, index: usize) -> u8 {
        self.inner.get(index)
    }

    /// Read-only view of the contents.
    pub fn as_slice(&self) -> &[u8] {
        self.inner.as_slice()
    }

    /// Overwrites every byte with 0.
    ///
    /// Always permitted, even though the buffer is frozen: wiping is the
    /// terminal operation of the lifecycle. Idempotent.
    pub fn zero(&mut self) {
        self.inner.zero();
    }

    /// Deep copy into a fresh mutable buffer.
    pub fn to_secure(&self) -> Result<SecureBuffer, BufferError> {
        self.inner.try_clone()
    }

    /// Deep copy of a sub-range into a fresh frozen buffer.
    pub fn slice(&self, offset: usize, len: usize) -> Result<Self, BufferError> {
        let end = offset.checked_add(len).ok_or(BufferError::RangeOutOfBounds {
            offset,
            len,
            buffer_len: self.len(),
        })?;
        if end > self.len() {
            return Err(BufferError::RangeOutOfBounds {
                offset,
                len,
                buffer_len: self.len(),
            });
        }

        Self::from_slice(&self.as_slice()[offset..end])
    }

    /// Deep copy. Frozen-ness propagates to the copy.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        Self::from_slice(self.as_slice())
    }
}

impl Zeroize for FrozenBuffer {
    fn zeroize(&mut self) {
        self.zero();
    }
}

impl core::fmt::Debug for FrozenBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FrozenBuffer")
            .field("len", &self.len())
            .finish_non_exhaustive()
    }
}
