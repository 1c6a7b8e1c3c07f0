// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-tty.
use thiserror::Error;

/// Errors from terminal mode changes.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum TerminalError {
    /// Restoring the saved terminal mode failed.
    #[error("tcsetattr(TCSANOW) failed while restoring echo")]
    Restore,
}
