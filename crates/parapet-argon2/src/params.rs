// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Argon2 configuration (RFC 9106 parameter block).

use parapet_buffer::FrozenBuffer;

use crate::error::Argon2Error;

pub(crate) const MIN_PARALLELISM: u32 = 1;
pub(crate) const MAX_PARALLELISM: u32 = (1 << 24) - 1;
pub(crate) const MIN_ITERATIONS: u32 = 1;

const DEFAULT_ITERATIONS: u32 = 3;
const DEFAULT_MEMORY_KIB: u32 = 1 << 12;
const DEFAULT_LANES: u32 = 1;

/// Argon2 variant selector (RFC 9106 `y`).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u32)]
pub enum Argon2Variant {
    /// Data-dependent memory addressing. Fastest, vulnerable to
    /// cache-timing side channels; for keys derived from high-entropy
    /// secrets.
    Argon2d = 0,
    /// Data-independent memory addressing; for password hashing where
    /// side channels matter.
    Argon2i = 1,
    /// Hybrid: data-independent for the first half of the first pass,
    /// data-dependent afterwards. The RFC-recommended default.
    Argon2id = 2,
}

/// Argon2 version selector (RFC 9106 `v`).
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
#[repr(u32)]
pub enum Argon2Version {
    /// Version 16 (0x10): later passes overwrite blocks.
    V0x10 = 0x10,
    /// Version 19 (0x13): later passes XOR into existing blocks.
    V0x13 = 0x13,
}

/// Immutable, validated Argon2 configuration.
///
/// Secret material (salt, optional secret, optional associated data) is
/// held in frozen buffers; [`clear`](Self::clear) wipes them.
pub struct Argon2Parameters {
    pub(crate) variant: Argon2Variant,
    pub(crate) version: Argon2Version,
    pub(crate) lanes: u32,
    pub(crate) memory_kib: u32,
    pub(crate) iterations: u32,
    pub(crate) salt: Option<FrozenBuffer>,
    pub(crate) secret: Option<FrozenBuffer>,
    pub(crate) additional: Option<FrozenBuffer>,
}

impl Argon2Parameters {
    /// Starts a builder for the given variant.
    pub fn builder(variant: Argon2Variant) -> Argon2ParametersBuilder {
        Argon2ParametersBuilder::new(variant)
    }

    /// Lane count (degree of parallelism).
    pub fn lanes(&self) -> u32 {
        self.lanes
    }

    /// Memory cost in KiB (pre-alignment).
    pub fn memory_kib(&self) -> u32 {
        self.memory_kib
    }

    /// Pass count.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Variant.
    pub fn variant(&self) -> Argon2Variant {
        self.variant
    }

    /// Version.
    pub fn version(&self) -> Argon2Version {
        self.version
    }

    /// Wipes the salt, secret and associated data.
    pub fn clear(&mut self) {
        if let Some(salt) = &mut self.salt {
            salt.zero();
        }
        if let Some(secret) = &mut self.secret {
            secret.zero();
        }
        if let Some(additional) = &mut self.additional {
            additional.zero();
        }
    }
}

impl Drop for Argon2Parameters {
    fn drop(&mut self) {
        self.clear();
    }
}

impl core::fmt::Debug for Argon2Parameters {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Argon2Parameters")
            .field("variant", &self.variant)
            .field("version", &self.version)
            .field("lanes", &self.lanes)
            .field("memory_kib", &self.memory_kib)
            .field("iterations", &self.iterations)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Argon2Parameters`].
///
/// Secret inputs are taken as frozen buffers so ownership (and the duty
/// to wipe) transfers into the built parameter record.
pub struct Argon2ParametersBuilder {
    variant: Argon2Variant,
    version: Argon2Version,
    lanes: u32,
    memory_kib: u32,
    iterations: u32,
    salt: Option<FrozenBuffer>,
    secret: Option<FrozenBuffer>,
    additional: Option<FrozenBuffer>,
}

impl Argon2ParametersBuilder {
    /// Creates a builder with the RFC-recommended defaults.
    pub fn new(variant: Argon2Variant) -> Self {
        Self {
            variant,
            version: Argon2Version::V0x13,
            lanes: DEFAULT_LANES,
            memory_kib: DEFAULT_MEMORY_KIB,
            iterations: DEFAULT_ITERATIONS,
            salt: None,
            secret: None,
            additional: None,
        }
    }

    /// Sets the nonce S (16 bytes recommended, unique per password).
    pub fn with_salt(mut self, salt: FrozenBuffer) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Sets the optional secret value K (pepper).
    pub fn with_secret(mut self, secret: FrozenBuffer) -> Self {
        self.secret = Some(secret);
        self
    }

    /// Sets the optional associated data X.
    pub fn with_additional(mut self, additional: FrozenBuffer) -> Self {
        self.additional = Some(additional);
        self
    }

    /// Sets the degree of parallelism p (1..=2^24-1).
    pub fn with_parallelism(mut self, lanes: u32) -> Self {
        self.lanes = lanes;
        self
    }

    /// Sets the memory size m in KiB. The effective block count is m
    /// rounded down to a multiple of 4·p·SYNC_POINTS, with a floor of
    /// 2·SYNC_POINTS·p.
    pub fn with_memory_kib(mut self, memory_kib: u32) -> Self {
        self.memory_kib = memory_kib;
        self
    }

    /// Sets the memory size as a power of two (m = 2^exponent KiB).
    pub fn with_memory_pow_of_two(mut self, exponent: u32) -> Self {
        self.memory_kib = 1 << exponent;
        self
    }

    /// Sets the pass count t.
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Selects the version (0x13 by default).
    pub fn with_version(mut self, version: Argon2Version) -> Self {
        self.version = version;
        self
    }

    /// Validates and produces the parameter record.
    pub fn build(self) -> Result<Argon2Parameters, Argon2Error> {
        if self.lanes < MIN_PARALLELISM || self.lanes > MAX_PARALLELISM {
            return Err(Argon2Error::InvalidLanes {
                got: self.lanes,
                max: MAX_PARALLELISM,
            });
        }
        if self.memory_kib < 2 * self.lanes {
            return Err(Argon2Error::InvalidMemory {
                got: self.memory_kib,
                min: 2 * self.lanes,
                lanes: self.lanes,
            });
        }
        if self.iterations < MIN_ITERATIONS {
            return Err(Argon2Error::InvalidIterations);
        }

        Ok(Argon2Parameters {
            variant: self.variant,
            version: self.version,
            lanes: self.lanes,
            memory_kib: self.memory_kib,
            iterations: self.iterations,
            salt: self.salt,
            secret: self.secret,
            additional: self.additional,
        })
    }
}
