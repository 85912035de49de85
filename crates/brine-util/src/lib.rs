// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Byte helpers shared by the Brine crates.
//!
//! - [`constant_time_eq`]: timing-independent slice comparison
//! - [`fast_zeroize_slice`] / [`fast_zeroize_vec`]: volatile wipes that the
//!   optimizer cannot elide
//!
//! With the `test-utils` feature, [`hex_to_bytes`] and [`is_slice_zeroized`]
//! are available for tests.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use core::sync::atomic::{Ordering, compiler_fence};

use subtle::ConstantTimeEq;

/// Compares two byte slices without short-circuiting on the first mismatch.
///
/// Slices of different length compare unequal. The length itself is not
/// treated as secret.
#[inline]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

/// Overwrites every byte of `data` with zero using volatile writes.
#[inline]
pub fn fast_zeroize_slice(data: &mut [u8]) {
    for byte in data.iter_mut() {
        // SAFETY: `byte` is a valid, aligned, exclusive reference.
        unsafe { core::ptr::write_volatile(byte, 0) };
    }

    compiler_fence(Ordering::SeqCst);
}

/// Zeroizes the initialized part of `data` and its spare capacity.
///
/// Length and capacity are left untouched.
pub fn fast_zeroize_vec(data: &mut Vec<u8>) {
    fast_zeroize_slice(data.as_mut_slice());

    for byte in data.spare_capacity_mut() {
        // SAFETY: spare capacity is owned, writable memory of the allocation.
        unsafe { core::ptr::write_volatile(byte.as_mut_ptr(), 0) };
    }

    compiler_fence(Ordering::SeqCst);
}

/// Returns `true` if every byte of `data` is zero.
#[cfg(any(test, feature = "test-utils"))]
pub fn is_slice_zeroized(data: &[u8]) -> bool {
    data.iter().all(|b| *b == 0)
}

/// Decodes a hex string into bytes.
///
/// # Panics
///
/// Panics on odd length or non-hex characters. Intended for test vectors only.
#[cfg(any(test, feature = "test-utils"))]
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(hex.len() % 2 == 0, "hex string must have even length");

    hex.as_bytes()
        .chunks(2)
        .map(|pair| {
            let digits = core::str::from_utf8(pair).expect("hex string must be ASCII");
            u8::from_str_radix(digits, 16).expect("invalid hex digit")
        })
        .collect()
}
