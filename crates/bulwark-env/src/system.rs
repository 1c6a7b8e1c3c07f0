// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::traits::PrivilegeDetector;

/// Privilege check backed by the OS.
///
/// - Linux/Android: `getauxval(AT_SECURE)`, which the kernel sets for setuid,
///   setgid and capability-raising execs
/// - macOS and the BSDs: `issetugid()`
/// - other Unix: real vs effective user and group ids
/// - non-Unix: never privileged
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPrivilegeDetector;

impl PrivilegeDetector for SystemPrivilegeDetector {
    fn is_privileged(&self) -> bool {
        running_in_privileged_state()
    }
}

/// Returns `true` if the process runs with elevated or dropped privileges.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub fn running_in_privileged_state() -> bool {
    unsafe { libc::getauxval(libc::AT_SECURE) != 0 }
}

/// Returns `true` if the process runs with elevated or dropped privileges.
#[cfg(any(target_vendor = "apple", target_os = "freebsd", target_os = "openbsd"))]
pub fn running_in_privileged_state() -> bool {
    unsafe { libc::issetugid() != 0 }
}

/// Returns `true` if the process runs with elevated or dropped privileges.
#[cfg(all(
    unix,
    not(any(
        target_os = "linux",
        target_os = "android",
        target_vendor = "apple",
        target_os = "freebsd",
        target_os = "openbsd"
    ))
))]
pub fn running_in_privileged_state() -> bool {
    unsafe { libc::getuid() != libc::geteuid() || libc::getgid() != libc::getegid() }
}

/// Returns `true` if the process runs with elevated or dropped privileges.
#[cfg(not(unix))]
pub fn running_in_privileged_state() -> bool {
    false
}
