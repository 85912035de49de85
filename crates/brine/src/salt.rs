// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;

use brine_rand::{EntropySource, SystemEntropySource};
use brine_util::fast_zeroize_vec;

use crate::algorithm::HashAlgorithm;
use crate::error::RealizeError;
use crate::traits::Realize;

/// Random prefix length of the default salt.
pub const DEFAULT_SALT_SIZE: usize = 16;

/// Salt parameters.
///
/// Realizes to `R ∥ H(R ∥ secret)` where `R` is `size` bytes of fresh
/// randomness and `H` is `algorithm`. The output is always
/// `size + algorithm.digest_len()` bytes long.
///
/// The secret is wiped when the value is dropped and is never printed by
/// `Debug`.
///
/// # Example
///
/// ```rust
/// use brine::{HashAlgorithm, Realize, Salt};
///
/// let salt = Salt::new(HashAlgorithm::Sha1, 16, "mypassword");
/// let first = salt.realize().expect("Failed to realize salt");
/// let second = salt.realize().expect("Failed to realize salt");
///
/// assert_eq!(first.len(), 36);
/// assert_ne!(first, second);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Salt {
    algorithm: HashAlgorithm,
    size: usize,
    secret: Vec<u8>,
}

impl Salt {
    /// Creates salt parameters.
    ///
    /// # Arguments
    ///
    /// * `algorithm` - Hash applied to `R ∥ secret`
    /// * `size` - Length of the random prefix `R`
    /// * `secret` - Secret mixed into the digest
    pub fn new(algorithm: HashAlgorithm, size: usize, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm,
            size,
            secret: secret.into(),
        }
    }

    /// Hash algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Length of the random prefix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Secret bytes.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Length of every realization: `size + digest_len`.
    ///
    /// Saturates at `usize::MAX`; such a salt can never be realized.
    pub fn output_len(&self) -> usize {
        self.size.saturating_add(self.algorithm.digest_len())
    }
}

impl Realize for Salt {
    fn realize_with(&self, entropy: &dyn EntropySource) -> Result<Vec<u8>, RealizeError> {
        salted_digest(entropy, self.algorithm, self.size, &self.secret)
    }
}

impl Drop for Salt {
    fn drop(&mut self) {
        fast_zeroize_vec(&mut self.secret);
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Salt")
            .field("algorithm", &self.algorithm)
            .field("size", &self.size)
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Generates a default salt: `size` random bytes followed by
/// `SHA1(random ∥ secret)`, using the OS entropy source.
///
/// The output is `size + 20` bytes. [`Combination`](crate::Combination) uses
/// this with [`DEFAULT_SALT_SIZE`] when no salt is supplied.
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if the OS source fails.
pub fn generate_default_salt(secret: &[u8], size: usize) -> Result<Vec<u8>, RealizeError> {
    generate_default_salt_with(&SystemEntropySource {}, secret, size)
}

/// Same as [`generate_default_salt`], drawing randomness from `entropy`.
///
/// # Errors
///
/// Returns [`RealizeError::EntropyUnavailable`] if `entropy` fails.
pub fn generate_default_salt_with(
    entropy: &dyn EntropySource,
    secret: &[u8],
    size: usize,
) -> Result<Vec<u8>, RealizeError> {
    salted_digest(entropy, HashAlgorithm::Sha1, size, secret)
}

/// Builds `R ∥ H(R ∥ secret)`.
///
/// The buffer is allocated once with room for the digest, so appending it
/// never reallocates.
fn salted_digest(
    entropy: &dyn EntropySource,
    algorithm: HashAlgorithm,
    size: usize,
    secret: &[u8],
) -> Result<Vec<u8>, RealizeError> {
    let digest_len = algorithm.digest_len();

    // An overflowing length requests usize::MAX bytes and fails as a capacity overflow
    let capacity = size.checked_add(digest_len).unwrap_or(usize::MAX);
    let mut buf = Vec::with_capacity(capacity);
    buf.resize(size, 0u8);

    if let Err(err) = entropy.fill_bytes(&mut buf) {
        log::error!("failed to draw {size} random salt bytes: {err}");
        fast_zeroize_vec(&mut buf);
        return Err(err.into());
    }

    let mut hasher = algorithm.hasher();
    hasher.update(&buf);
    hasher.update(secret);
    hasher.finalize_into(&mut buf);

    log::trace!("realized {algorithm} salt of {} bytes", buf.len());

    Ok(buf)
}
