// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use parapet_buffer::FrozenBuffer;

use crate::{Argon2, Argon2Error, Argon2Parameters, Argon2Variant};

fn builder() -> crate::Argon2ParametersBuilder {
    Argon2Parameters::builder(Argon2Variant::Argon2id)
        .with_salt(FrozenBuffer::from_slice(&[0x02; 16]).unwrap())
}

#[test]
fn test_zero_lanes_rejected() {
    let result = builder().with_parallelism(0).build();
    assert!(matches!(result, Err(Argon2Error::InvalidLanes { .. })));
}

#[test]
fn test_excessive_lanes_rejected() {
    let result = builder().with_parallelism(1 << 24).build();
    assert!(matches!(result, Err(Argon2Error::InvalidLanes { .. })));
}

#[test]
fn test_memory_below_two_blocks_per_lane_rejected() {
    let result = builder().with_parallelism(4).with_memory_kib(7).build();
    assert!(matches!(result, Err(Argon2Error::InvalidMemory { .. })));
}

#[test]
fn test_zero_iterations_rejected() {
    let result = builder().with_iterations(0).build();
    assert!(matches!(result, Err(Argon2Error::InvalidIterations)));
}

#[test]
fn test_output_below_minimum_rejected() {
    let params = builder()
        .with_memory_kib(16)
        .with_iterations(1)
        .build()
        .unwrap();
    let mut argon2 = Argon2::new(params).unwrap();

    let mut out = [0u8; 3];
    let result = argon2.generate(b"password", &mut out);
    assert!(matches!(result, Err(Argon2Error::OutputTooShort { .. })));
}

#[test]
fn test_small_memory_is_rounded_up_to_minimum() {
    // m = 8 with p = 1 is below 2 * SYNC_POINTS, generator still works
    let params = builder()
        .with_memory_kib(8)
        .with_iterations(1)
        .build()
        .unwrap();
    let mut argon2 = Argon2::new(params).unwrap();

    let mut out = [0u8; 16];
    argon2.generate(b"password", &mut out).unwrap();
    assert!(out.iter().any(|&b| b != 0));
}

#[test]
fn test_clear_wipes_secret_material() {
    let mut params = builder()
        .with_secret(FrozenBuffer::from_slice(&[0x03; 8]).unwrap())
        .build()
        .unwrap();
    params.clear();
}
