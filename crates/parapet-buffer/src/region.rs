// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backing storage for the secure buffer types.
//!
//! On Unix a region is an anonymous private mapping: page-aligned (safe to
//! reinterpret at any element width), excluded from core dumps where
//! `MADV_DONTDUMP` exists, and pinned with a best-effort `mlock`. `mlock`
//! failure is recorded, not fatal: the memory-hard KDFs allocate far more
//! than the default `RLIMIT_MEMLOCK` allows, and an unlocked region still
//! satisfies the wipe discipline.
//!
//! On non-Unix targets the region is an ordinary allocation; it loses the
//! page-level properties but keeps the guaranteed wipe on drop.

use core::ptr;

use crate::error::BufferError;

#[cfg(unix)]
pub(crate) struct Region<T: Copy + Default> {
    ptr: *mut T,
    len: usize,
    locked: bool,
}

#[cfg(unix)]
impl<T: Copy + Default> Region<T> {
    /// Maps a zero-initialized region holding `len` elements of `T`.
    pub(crate) fn alloc(len: usize) -> Result<Self, BufferError> {
        if len == 0 {
            return Ok(Self {
                ptr: ptr::NonNull::<T>::dangling().as_ptr(),
                len: 0,
                locked: false,
            });
        }

        let byte_len = len
            .checked_mul(core::mem::size_of::<T>())
            .ok_or(BufferError::Map)?;

        let raw = unsafe {
            libc::mmap(
                ptr::null_mut(),
                byte_len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_PRIVATE | libc::MAP_ANONYMOUS,
                -1,
                0,
            )
        };

        if raw == libc::MAP_FAILED {
            return Err(BufferError::Map);
        }

        let locked = unsafe { libc::mlock(raw, byte_len) } == 0;

        #[cfg(target_os = "linux")]
        unsafe {
            libc::madvise(raw, byte_len, libc::MADV_DONTDUMP);
        }

        Ok(Self {
            ptr: raw.cast::<T>(),
            len,
            locked,
        })
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        unsafe { core::slice::from_raw_parts(self.ptr, self.len) }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { core::slice::from_raw_parts_mut(self.ptr, self.len) }
    }

    pub(crate) fn is_locked(&self) -> bool {
        self.locked
    }

    /// Overwrites every element with the zero pattern.
    ///
    /// Volatile writes followed by a compiler fence so the wipe cannot be
    /// elided as a dead store.
    pub(crate) fn zero(&mut self) {
        let byte_len = self.len * core::mem::size_of::<T>();
        let bytes = self.ptr.cast::<u8>();
        for i in 0..byte_len {
            unsafe { ptr::write_volatile(bytes.add(i), 0) };
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(unix)]
impl<T: Copy + Default> Drop for Region<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }

        self.zero();

        let byte_len = self.len * core::mem::size_of::<T>();
        unsafe {
            if self.locked {
                libc::munlock(self.ptr.cast(), byte_len);
            }
            libc::munmap(self.ptr.cast(), byte_len);
        }
    }
}

// Safety: a Region owns its mapping exclusively; access is gated by &/&mut.
#[cfg(unix)]
unsafe impl<T: Copy + Default + Send> Send for Region<T> {}
#[cfg(unix)]
unsafe impl<T: Copy + Default + Sync> Sync for Region<T> {}

#[cfg(not(unix))]
pub(crate) struct Region<T: Copy + Default> {
    data: alloc::vec::Vec<T>,
}

#[cfg(not(unix))]
impl<T: Copy + Default> Region<T> {
    pub(crate) fn alloc(len: usize) -> Result<Self, BufferError> {
        Ok(Self {
            data: alloc::vec![T::default(); len],
        })
    }

    pub(crate) fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub(crate) fn is_locked(&self) -> bool {
        false
    }

    pub(crate) fn zero(&mut self) {
        let byte_len = self.data.len() * core::mem::size_of::<T>();
        let bytes = self.data.as_mut_ptr().cast::<u8>();
        for i in 0..byte_len {
            unsafe { ptr::write_volatile(bytes.add(i), 0) };
        }
        core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
    }
}

#[cfg(not(unix))]
impl<T: Copy + Default> Drop for Region<T> {
    fn drop(&mut self) {
        self.zero();
    }
}
