// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use brine_rand::EntropyError;
use thiserror::Error;

/// Realization error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RealizeError {
    /// The random source failed while drawing a salt prefix
    #[error("entropy unavailable: {0}")]
    EntropyUnavailable(#[from] EntropyError),
}
