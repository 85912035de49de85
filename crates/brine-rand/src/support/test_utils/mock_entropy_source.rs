// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// What a [`MockEntropySource`] does on each `fill_bytes` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Delegate to the OS source.
    Os,
    /// Every call fails.
    FailAlways,
    /// Only the Nth call fails (1-indexed).
    FailOnCall(usize),
    /// Every byte is set to the given value, making salts reproducible.
    Constant(u8),
}

/// Entropy source with scripted output and failures.
///
/// Counts `fill_bytes` calls so tests can check how many random prefixes a
/// realization drew.
pub struct MockEntropySource {
    behaviour: MockEntropySourceBehaviour,
    calls: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a mock with the given behaviour.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            behaviour,
            calls: Cell::new(0),
        }
    }

    /// Number of `fill_bytes` calls so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);

        match self.behaviour {
            MockEntropySourceBehaviour::Os => SystemEntropySource {}.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::FailOnCall(n) if n == call => {
                Err(EntropyError::EntropyNotAvailable)
            }
            MockEntropySourceBehaviour::FailOnCall(_) => SystemEntropySource {}.fill_bytes(dest),
            MockEntropySourceBehaviour::Constant(byte) => {
                dest.fill(byte);
                Ok(())
            }
        }
    }
}
