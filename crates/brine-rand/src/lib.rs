// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # brine_rand
//!
//! Cryptographically secure random bytes for the Brine salted-hash helpers.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//! - [`EntropySource`]: Interface for CSPRNGs, so callers and tests can
//!   swap the source used to build salts
//!
//! ## Example
//!
//! ```rust
//! use brine_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut prefix = [0u8; 16];
//! entropy.fill_bytes(&mut prefix).expect("Failed to generate entropy");
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `ProcessPrng`
//! - WASM: `crypto.getRandomValues` (`wasm_js` backend)

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]


mod error;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
