// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Free helpers over the [`Realize`] capability.

use alloc::vec::Vec;

use brine_rand::{EntropySource, SystemEntropySource};
use brine_util::constant_time_eq;

use crate::algorithm::HashAlgorithm;
use crate::combination::Combination;
use crate::error::RealizeError;
use crate::salt::{DEFAULT_SALT_SIZE, generate_default_salt_with};
use crate::traits::Realize;

/// Realizes any [`Salt`](crate::Salt) or [`Combination`].
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if the OS source fails.
pub fn create_hash<R: Realize + ?Sized>(entity: &R) -> Result<Vec<u8>, RealizeError> {
    entity.realize()
}

/// Same as [`create_hash`], drawing randomness from `entropy`.
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if `entropy` fails.
pub fn create_hash_with<R: Realize + ?Sized>(
    entity: &R,
    entropy: &dyn EntropySource,
) -> Result<Vec<u8>, RealizeError> {
    entity.realize_with(entropy)
}

/// Hashes `secret` as a SHA-1 [`Combination`] with a fresh default salt.
///
/// Always 20 bytes; two calls with the same secret return different digests.
///
/// # Example
///
/// ```rust
/// use brine::create_hash_from_secret;
///
/// let first = create_hash_from_secret("hunter2").expect("Failed to hash");
/// let second = create_hash_from_secret("hunter2").expect("Failed to hash");
///
/// assert_eq!(first.len(), 20);
/// assert_ne!(first, second);
/// ```
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if the OS source fails.
pub fn create_hash_from_secret(secret: impl AsRef<[u8]>) -> Result<Vec<u8>, RealizeError> {
    create_hash_from_secret_with(&SystemEntropySource {}, secret)
}

/// Same as [`create_hash_from_secret`], drawing randomness from `entropy`.
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if `entropy` fails.
pub fn create_hash_from_secret_with(
    entropy: &dyn EntropySource,
    secret: impl AsRef<[u8]>,
) -> Result<Vec<u8>, RealizeError> {
    let secret = secret.as_ref();
    let salt = generate_default_salt_with(entropy, secret, DEFAULT_SALT_SIZE)?;

    Combination::with_salt(HashAlgorithm::Sha1, secret, salt).realize_with(entropy)
}

/// Realizes both sides once and compares the bytes.
///
/// The comparison short-circuits and is **not** timing-safe; use
/// [`matches_constant_time`] when checking credentials. Values that draw
/// randomness (a bare salt, a combination without salt) almost never match,
/// even against themselves.
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if the OS source fails.
pub fn matches<A, B>(a: &A, b: &B) -> Result<bool, RealizeError>
where
    A: Realize + ?Sized,
    B: Realize + ?Sized,
{
    matches_with(a, b, &SystemEntropySource {})
}

/// Same as [`matches`], drawing randomness from `entropy`.
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if `entropy` fails.
pub fn matches_with<A, B>(a: &A, b: &B, entropy: &dyn EntropySource) -> Result<bool, RealizeError>
where
    A: Realize + ?Sized,
    B: Realize + ?Sized,
{
    let left = a.realize_with(entropy)?;
    let right = b.realize_with(entropy)?;

    Ok(left == right)
}

/// Like [`matches`], but compares the realized bytes in constant time.
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if the OS source fails.
pub fn matches_constant_time<A, B>(a: &A, b: &B) -> Result<bool, RealizeError>
where
    A: Realize + ?Sized,
    B: Realize + ?Sized,
{
    matches_constant_time_with(a, b, &SystemEntropySource {})
}

/// Same as [`matches_constant_time`], drawing randomness from `entropy`.
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if `entropy` fails.
pub fn matches_constant_time_with<A, B>(
    a: &A,
    b: &B,
    entropy: &dyn EntropySource,
) -> Result<bool, RealizeError>
where
    A: Realize + ?Sized,
    B: Realize + ?Sized,
{
    let left = a.realize_with(entropy)?;
    let right = b.realize_with(entropy)?;

    Ok(constant_time_eq(&left, &right))
}
