// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Typed working arrays under the secure storage discipline.
//!
//! The KDF and cipher cores keep their large intermediate state in 16, 32
//! or 64-bit words. These arrays give that state the same backing and wipe
//! guarantees as [`SecureBuffer`](crate::SecureBuffer) without forcing the
//! numeric code through byte reinterpretation.

use zeroize::Zeroize;

use crate::error::BufferError;
use crate::region::Region;

macro_rules! secure_array {
    ($(#[$doc:meta])* $name:ident, $ty:ty) => {
        $(#[$doc])*
        pub struct $name {
            region: Region<$ty>,
        }

        impl $name {
            /// Allocates a zero-initialized array of `len` elements.
            pub fn alloc(len: usize) -> Result<Self, BufferError> {
                Ok(Self {
                    region: Region::alloc(len)?,
                })
            }

            /// Allocates an array holding a copy of `src`.
            pub fn from_slice(src: &[$ty]) -> Result<Self, BufferError> {
                let mut array = Self::alloc(src.len())?;
                array.as_mut_slice().copy_from_slice(src);
                Ok(array)
            }

            /// Returns the number of elements.
            pub fn len(&self) -> usize {
                self.region.as_slice().len()
            }

            /// Returns true if the array has zero length.
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Returns the element at `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index` is out of bounds, like slice indexing.
            pub fn get(&self, index: usize) -> $ty {
                self.region.as_slice()[index]
            }

            /// Sets the element at `index`.
            ///
            /// # Panics
            ///
            /// Panics if `index` is out of bounds, like slice indexing.
            pub fn set(&mut self, index: usize, value: $ty) {
                self.region.as_mut_slice()[index] = value;
            }

            /// Fills the entire array with `value`.
            pub fn fill(&mut self, value: $ty) {
                self.region.as_mut_slice().fill(value);
            }

            /// XORs `value` into the element at `index`.
            pub fn xor(&mut self, index: usize, value: $ty) {
                self.region.as_mut_slice()[index] ^= value;
            }

            /// Read-only view of the contents.
            pub fn as_slice(&self) -> &[$ty] {
                self.region.as_slice()
            }

            /// Mutable view of the contents.
            pub fn as_mut_slice(&mut self) -> &mut [$ty] {
                self.region.as_mut_slice()
            }

            /// Overwrites every element with 0. Idempotent.
            pub fn zero(&mut self) {
                self.region.zero();
            }

            /// Deep copy. The copy is independent and starts mutable.
            pub fn try_clone(&self) -> Result<Self, BufferError> {
                Self::from_slice(self.as_slice())
            }
        }

        impl Zeroize for $name {
            fn zeroize(&mut self) {
                self.zero();
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("len", &self.len())
                    .finish_non_exhaustive()
            }
        }
    };
}

secure_array!(
    /// Securely stored array of 16-bit units (UTF-16 code units for
    /// password text that must stay wipeable).
    SecureChars,
    u16
);

secure_array!(
    /// Securely stored array of 32-bit words.
    SecureInts,
    u32
);

secure_array!(
    /// Securely stored array of 64-bit words.
    SecureLongs,
    u64
);
