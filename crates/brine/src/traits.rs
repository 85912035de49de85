// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::boxed::Box;
use alloc::vec::Vec;

use brine_rand::{EntropySource, SystemEntropySource};

use crate::error::RealizeError;

/// Capability shared by [`Salt`](crate::Salt) and [`Combination`](crate::Combination):
/// produce a byte-sequence digest.
///
/// Realization never mutates `self`. When randomness is involved (any salt
/// realization, or a combination without a salt) every call draws fresh
/// entropy, so two calls return different bytes.
///
/// The trait is object safe, so salts and combinations can be held together
/// as `Box<dyn Realize>` or `&dyn Realize`.
///
/// ```rust
/// use brine::{Combination, HashAlgorithm, Realize, Salt, create_hash};
///
/// let entities: Vec<Box<dyn Realize>> = vec![
///     Box::new(Salt::new(HashAlgorithm::Md5, 4, "mypassword")),
///     Box::new(Combination::with_salt(HashAlgorithm::Sha256, "mypassword", "@#!s_&")),
/// ];
///
/// let lengths: Vec<usize> = entities
///     .iter()
///     .map(|entity| create_hash(entity.as_ref()).expect("Failed to create_hash(..)").len())
///     .collect();
///
/// assert_eq!(lengths, [20, 32]);
/// ```
pub trait Realize {
    /// Realizes the value, drawing any randomness from `entropy`.
    ///
    /// # Errors
    ///
    /// Returns [`RealizeError::EntropyUnavailable`] if `entropy` fails.
    fn realize_with(&self, entropy: &dyn EntropySource) -> Result<Vec<u8>, RealizeError>;

    /// Realizes the value using the OS entropy source.
    ///
    /// # Errors
    ///
    /// Returns [`RealizeError::EntropyUnavailable`] if the OS source fails.
    fn realize(&self) -> Result<Vec<u8>, RealizeError> {
        self.realize_with(&SystemEntropySource {})
    }
}

impl<T: Realize + ?Sized> Realize for &T {
    fn realize_with(&self, entropy: &dyn EntropySource) -> Result<Vec<u8>, RealizeError> {
        (**self).realize_with(entropy)
    }
}

impl<T: Realize + ?Sized> Realize for Box<T> {
    fn realize_with(&self, entropy: &dyn EntropySource) -> Result<Vec<u8>, RealizeError> {
        (**self).realize_with(entropy)
    }
}
