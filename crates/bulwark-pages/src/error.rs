// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-pages.
use thiserror::Error;

/// Errors from page syscalls.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
#[repr(u8)]
pub enum PageError {
    /// Mapping the page and its guards failed.
    #[error("mmap failed")]
    Create = 0,

    /// Locking the page in RAM failed.
    #[error("mlock failed")]
    Lock = 1,

    /// Making the page inaccessible failed.
    #[error("mprotect(PROT_NONE) failed")]
    Protect = 2,

    /// Making the page accessible again failed.
    #[error("mprotect(PROT_READ | PROT_WRITE) failed")]
    Unprotect = 3,

    /// Turning a guard page inaccessible failed.
    #[error("mprotect(PROT_NONE) on guard page failed")]
    Guard = 4,

    /// No page locking on this platform.
    #[error("page locking is not supported on this platform")]
    Unsupported = 5,
}
