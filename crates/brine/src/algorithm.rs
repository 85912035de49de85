// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Hash algorithm selection.
//!
//! [`HashAlgorithm`] is the single dispatch point for both the digest length
//! and the hash state. Anything that is not a recognized tag or name resolves
//! to SHA-1 for both, so length and state can never disagree.

use alloc::vec::Vec;
use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

use digest::Digest;
use md5::Md5;
use sha1::Sha1;
use sha2::Sha256;

/// Algorithm used when a tag or name is not recognized.
pub const DEFAULT_ALGORITHM: HashAlgorithm = HashAlgorithm::Sha1;

const MD5_DIGEST_LEN: usize = 16;
const SHA1_DIGEST_LEN: usize = 20;
const SHA256_DIGEST_LEN: usize = 32;

/// Supported hash algorithms
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgorithm {
    /// MD5 (16-byte output)
    Md5,
    /// SHA-1 (20-byte output)
    #[default]
    Sha1,
    /// SHA-256 (32-byte output)
    Sha256,
}

impl HashAlgorithm {
    /// All recognized algorithms, in tag order.
    pub const ALL: [HashAlgorithm; 3] = [Self::Md5, Self::Sha1, Self::Sha256];

    /// Resolves a numeric tag: `1` is MD5, `2` is SHA-1, `3` is SHA-256.
    ///
    /// Every other value, `0` included, resolves to SHA-1.
    pub fn from_tag(tag: u32) -> Self {
        match tag {
            1 => Self::Md5,
            2 => Self::Sha1,
            3 => Self::Sha256,
            other => {
                log::warn!("unrecognized hash tag {other}, falling back to {DEFAULT_ALGORITHM}");
                DEFAULT_ALGORITHM
            }
        }
    }

    /// Numeric tag of this algorithm (inverse of [`from_tag`](Self::from_tag)).
    pub fn tag(self) -> u32 {
        match self {
            Self::Md5 => 1,
            Self::Sha1 => 2,
            Self::Sha256 => 3,
        }
    }

    /// Diagnostic name: `"MD5"`, `"SHA1"` or `"SHA256"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha256 => "SHA256",
        }
    }

    /// Digest length in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            Self::Md5 => MD5_DIGEST_LEN,
            Self::Sha1 => SHA1_DIGEST_LEN,
            Self::Sha256 => SHA256_DIGEST_LEN,
        }
    }

    /// Returns a fresh hash state for this algorithm.
    pub fn hasher(self) -> Hasher {
        match self {
            Self::Md5 => Hasher::Md5(Md5::new()),
            Self::Sha1 => Hasher::Sha1(Sha1::new()),
            Self::Sha256 => Hasher::Sha256(Sha256::new()),
        }
    }
}

impl From<u32> for HashAlgorithm {
    fn from(tag: u32) -> Self {
        Self::from_tag(tag)
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Infallible;

    /// Case-insensitive; accepts `MD5`/`MD-5`, `SHA1`/`SHA-1`, `SHA256`/`SHA-256`.
    /// Unknown names resolve to SHA-1, like unknown tags.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let name = name.trim();
        let is = |candidates: &[&str]| candidates.iter().any(|c| name.eq_ignore_ascii_case(c));

        if is(&["md5", "md-5"]) {
            Ok(Self::Md5)
        } else if is(&["sha1", "sha-1"]) {
            Ok(Self::Sha1)
        } else if is(&["sha256", "sha-256"]) {
            Ok(Self::Sha256)
        } else {
            log::warn!("unrecognized hash name {name:?}, falling back to {DEFAULT_ALGORITHM}");
            Ok(DEFAULT_ALGORITHM)
        }
    }
}

/// Hash state for one of the supported algorithms.
///
/// Obtained from [`HashAlgorithm::hasher`].
#[derive(Clone)]
pub enum Hasher {
    /// MD5 state
    Md5(Md5),
    /// SHA-1 state
    Sha1(Sha1),
    /// SHA-256 state
    Sha256(Sha256),
}

impl Hasher {
    /// Absorbs `data`.
    pub fn update(&mut self, data: &[u8]) {
        match self {
            Self::Md5(h) => Digest::update(h, data),
            Self::Sha1(h) => Digest::update(h, data),
            Self::Sha256(h) => Digest::update(h, data),
        }
    }

    /// Algorithm this state belongs to.
    pub fn algorithm(&self) -> HashAlgorithm {
        match self {
            Self::Md5(_) => HashAlgorithm::Md5,
            Self::Sha1(_) => HashAlgorithm::Sha1,
            Self::Sha256(_) => HashAlgorithm::Sha256,
        }
    }

    /// Appends the digest to `out`.
    pub fn finalize_into(self, out: &mut Vec<u8>) {
        match self {
            Self::Md5(h) => out.extend_from_slice(&h.finalize()),
            Self::Sha1(h) => out.extend_from_slice(&h.finalize()),
            Self::Sha256(h) => out.extend_from_slice(&h.finalize()),
        }
    }

    /// Returns the digest as a new vector of exactly `digest_len` bytes.
    pub fn finalize(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.algorithm().digest_len());
        self.finalize_into(&mut out);
        out
    }
}

impl fmt::Debug for Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Hasher").field(&self.algorithm()).finish()
    }
}
