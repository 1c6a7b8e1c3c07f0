// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::TerminalError;

/// Echo switched off on a terminal until dropped.
///
/// Never constructed: this platform has no terminal mode switching.
#[derive(Debug)]
pub struct EchoSuppression {
    _private: (),
}

#[cfg(test)]
impl EchoSuppression {
    pub(crate) fn inert() -> Self {
        Self { _private: () }
    }
}

impl EchoSuppression {
    /// Descriptor whose echo is suppressed. `-1`: there is none.
    pub fn fd(&self) -> i32 {
        -1
    }

    /// Returns `true`: there is never a mode left to restore.
    pub fn is_restored(&self) -> bool {
        true
    }

    /// Puts the terminal back in the mode it had before suppression.
    pub fn reenable_echo(&mut self) -> Result<(), TerminalError> {
        Ok(())
    }
}
