// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Bulwark crates.
//!
//! Scenarios that are expected to kill the process (guard page hits, access to
//! protected pages) or that permanently alter it (seccomp filters) never run in
//! the test harness process itself. They run either in a forked child
//! ([`run_in_child`]) or in a re-executed copy of the test binary restricted to
//! a single `#[ignore]`d test ([`run_test_as_subprocess`]).
//!
//! ## License
//!
//! GPL-3.0-only

#[cfg(test)]
mod tests;

#[cfg(unix)]
mod child;
#[cfg(target_os = "linux")]
mod seccomp;
mod subprocess;

#[cfg(unix)]
pub use child::{ChildOutcome, run_in_child};
#[cfg(target_os = "linux")]
pub use seccomp::{
    block_madvise, block_mlock, block_mprotect, block_syscall, is_seccomp_available,
};
pub use subprocess::run_test_as_subprocess;
