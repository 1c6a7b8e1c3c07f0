// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::system::SystemPrivilegeDetector;
use crate::traits::PrivilegeDetector;

/// Configurable behavior for [`MockPrivilegeDetector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockPrivilegeDetectorBehaviour {
    /// Normal operation (delegates to the real detector).
    None,
    /// Report a privileged (setuid-like) process.
    ForcePrivileged,
    /// Report an unprivileged process.
    ForceUnprivileged,
}

/// Mock privilege detector for testing.
///
/// Wraps [`SystemPrivilegeDetector`] but allows simulating a privileged
/// process via [`MockPrivilegeDetectorBehaviour`].
#[derive(Debug)]
pub struct MockPrivilegeDetector {
    inner: SystemPrivilegeDetector,
    behaviour: MockPrivilegeDetectorBehaviour,
    is_privileged_count: Cell<usize>,
}

impl MockPrivilegeDetector {
    /// Creates a new mock detector with the specified behavior.
    pub fn new(behaviour: MockPrivilegeDetectorBehaviour) -> Self {
        Self {
            inner: SystemPrivilegeDetector,
            behaviour,
            is_privileged_count: Cell::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockPrivilegeDetectorBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns how many times the privilege check ran.
    pub fn call_count(&self) -> usize {
        self.is_privileged_count.get()
    }
}

impl PrivilegeDetector for MockPrivilegeDetector {
    fn is_privileged(&self) -> bool {
        self.is_privileged_count.set(self.is_privileged_count.get() + 1);

        match self.behaviour {
            MockPrivilegeDetectorBehaviour::None => self.inner.is_privileged(),
            MockPrivilegeDetectorBehaviour::ForcePrivileged => true,
            MockPrivilegeDetectorBehaviour::ForceUnprivileged => false,
        }
    }
}
