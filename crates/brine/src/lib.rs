// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # brine
//!
//! Salted MD5 / SHA-1 / SHA-256 digests.
//!
//! Two value types expose a single [`Realize`] capability:
//!
//! - [`Salt`]: `R ∥ H(R ∥ secret)`, where `R` is `size` fresh random bytes.
//! - [`Combination`]: `H(secret ∥ salt)`. Without a caller-supplied salt, a
//!   default salt (16 random bytes + SHA-1) is generated on every realization.
//!
//! Free helpers build on that capability: [`create_hash`],
//! [`create_hash_from_secret`], [`matches`] and [`matches_constant_time`].
//!
//! ## Example
//!
//! ```rust
//! use brine::{Combination, HashAlgorithm, Realize, Salt, matches};
//!
//! let salt = Salt::new(HashAlgorithm::Md5, 16, "superStrongPassword321")
//!     .realize()
//!     .expect("Failed to realize salt");
//! assert_eq!(salt.len(), 16 + 16);
//!
//! let stored = Combination::with_salt(HashAlgorithm::Sha256, "superStrongPassword321", salt.clone());
//! let attempt = Combination::with_salt(HashAlgorithm::Sha256, "superStrongPassword321", salt);
//!
//! assert!(matches(&stored, &attempt).expect("Failed to match"));
//! ```
//!
//! ## Not a password KDF
//!
//! There is no iteration count and no memory cost. Digests produced here must
//! not be stored as credentials without a proper KDF on top.
//!
//! ## Errors
//!
//! The only failure is an unavailable entropy source, surfaced as
//! [`RealizeError::EntropyUnavailable`]. Unknown algorithm tags resolve to
//! SHA-1 and empty salts are replaced by a default salt; neither is an error.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;


mod algorithm;
mod combination;
mod error;
mod helpers;
mod salt;
mod traits;

pub use algorithm::{DEFAULT_ALGORITHM, HashAlgorithm, Hasher};
pub use combination::Combination;
pub use error::RealizeError;
pub use helpers::{
    create_hash, create_hash_from_secret, create_hash_from_secret_with, create_hash_with, matches,
    matches_constant_time, matches_constant_time_with, matches_with,
};
pub use salt::{DEFAULT_SALT_SIZE, Salt, generate_default_salt, generate_default_salt_with};
pub use traits::Realize;

pub use brine_rand::{EntropyError, EntropySource, SystemEntropySource};

#[cfg(feature = "test-utils")]
pub use brine_rand::test_utils;
