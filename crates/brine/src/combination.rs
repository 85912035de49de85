// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;
use core::fmt;

use brine_rand::EntropySource;
use brine_util::fast_zeroize_vec;

use crate::algorithm::HashAlgorithm;
use crate::error::RealizeError;
use crate::salt::{DEFAULT_SALT_SIZE, generate_default_salt_with};
use crate::traits::Realize;

/// Secret and salt combined under one hash.
///
/// Realizes to `H(secret ∥ salt)`, always `algorithm.digest_len()` bytes.
///
/// With an explicit non-empty salt the output is deterministic. With no salt
/// (or an empty one) every realization generates a fresh default salt, so
/// the output differs on each call. The generated salt is local to the call:
/// the combination itself is never modified.
///
/// Secret and salt are wiped on drop and never printed by `Debug`.
///
/// # Example
///
/// ```rust
/// use brine::{Combination, HashAlgorithm, Realize};
///
/// let password = Combination::with_salt(HashAlgorithm::Sha1, "mypassword", "@#!s_&");
///
/// let first = password.realize().expect("Failed to realize combination");
/// let second = password.realize().expect("Failed to realize combination");
///
/// assert_eq!(first.len(), 20);
/// assert_eq!(first, second);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Combination {
    algorithm: HashAlgorithm,
    secret: Vec<u8>,
    salt: Vec<u8>,
}

impl Combination {
    /// Creates a combination without a salt. A default salt is generated on
    /// every realization.
    pub fn new(algorithm: HashAlgorithm, secret: impl Into<Vec<u8>>) -> Self {
        Self {
            algorithm,
            secret: secret.into(),
            salt: Vec::new(),
        }
    }

    /// Creates a combination with a caller-supplied salt.
    ///
    /// An empty `salt` behaves like [`Combination::new`].
    pub fn with_salt(
        algorithm: HashAlgorithm,
        secret: impl Into<Vec<u8>>,
        salt: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            algorithm,
            secret: secret.into(),
            salt: salt.into(),
        }
    }

    /// Hash algorithm.
    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// Secret bytes.
    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    /// Caller-supplied salt, or `None` when a default salt will be generated.
    pub fn salt(&self) -> Option<&[u8]> {
        if self.salt.is_empty() {
            None
        } else {
            Some(&self.salt)
        }
    }

    /// Length of every realization.
    pub fn output_len(&self) -> usize {
        self.algorithm.digest_len()
    }
}

impl Realize for Combination {
    fn realize_with(&self, entropy: &dyn EntropySource) -> Result<Vec<u8>, RealizeError> {
        let mut hasher = self.algorithm.hasher();
        hasher.update(&self.secret);

        match self.salt() {
            Some(salt) => hasher.update(salt),
            None => {
                let mut salt =
                    generate_default_salt_with(entropy, &self.secret, DEFAULT_SALT_SIZE)?;
                hasher.update(&salt);
                fast_zeroize_vec(&mut salt);
            }
        }

        Ok(hasher.finalize())
    }
}

impl Drop for Combination {
    fn drop(&mut self) {
        fast_zeroize_vec(&mut self.secret);
        fast_zeroize_vec(&mut self.salt);
    }
}

impl fmt::Debug for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combination")
            .field("algorithm", &self.algorithm)
            .field("secret", &"[REDACTED]")
            .field("salt", &if self.salt.is_empty() { "[DEFAULT]" } else { "[REDACTED]" })
            .finish()
    }
}
