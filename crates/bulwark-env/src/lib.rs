// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # bulwark_env
//!
//! Privilege-aware environment reads, in the spirit of glibc's
//! `secure_getenv`.
//!
//! A setuid/setgid process inherits its environment from a less privileged
//! caller. When such a state is detected, every read behaves as if the
//! variable were unset and the environment is not inspected at all.
//!
//! Configuration code must go through this crate rather than `std::env` so
//! that the refusal applies everywhere.
//!
//! ## Example
//!
//! ```rust
//! use bulwark_env::{read_env_variable, read_env_variable_sz};
//!
//! let pool_kib = read_env_variable_sz("BULWARK_MLOCK_POOL_SIZE", 512);
//! let _ = read_env_variable("HOME");
//! assert!(pool_kib <= usize::MAX);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod reader;
mod support;
mod system;
mod traits;

pub use reader::EnvReader;
pub use system::{SystemPrivilegeDetector, running_in_privileged_state};
pub use traits::PrivilegeDetector;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;

/// Returns the variable's value if set and the process is not privileged.
pub fn read_env_variable(name: &str) -> Option<String> {
    EnvReader::<SystemPrivilegeDetector>::default().read(name)
}

/// Returns the variable as an unsigned integer, or `default`.
///
/// `default` is returned when the variable is unset, refused because the
/// process is privileged, negative, or not a decimal integer.
pub fn read_env_variable_sz(name: &str, default: usize) -> usize {
    EnvReader::<SystemPrivilegeDetector>::default().read_sz(name, default)
}
