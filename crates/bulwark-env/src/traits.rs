// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Decides whether the process runs with elevated or dropped privileges.
///
/// A process in that state (setuid/setgid binaries, file capabilities) must
/// not trust its environment: it was set by a less privileged caller.
pub trait PrivilegeDetector {
    /// Returns `true` if the environment must not be consulted.
    fn is_privileged(&self) -> bool;
}
