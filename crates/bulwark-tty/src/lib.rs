// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # bulwark_tty
//!
//! Turns terminal echo off while a secret is typed, and back on afterwards.
//!
//! ```rust,no_run
//! use bulwark_tty::suppress_echo_on_terminal;
//!
//! let mut line = String::new();
//!
//! {
//!     let _silent = suppress_echo_on_terminal();
//!     std::io::stdin().read_line(&mut line).expect("Failed to read_line(..)");
//! } // echo is back here, even on early return or panic
//! ```
//!
//! When standard input is not a terminal (piped, redirected) nothing is
//! changed and `None` comes back; reading proceeds as usual.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
#[cfg(not(unix))]
mod portable;
#[cfg(unix)]
mod unix;

pub use error::TerminalError;
#[cfg(not(unix))]
pub use portable::EchoSuppression;
#[cfg(unix)]
pub use unix::EchoSuppression;

/// Suppresses echo on standard input.
///
/// Returns `None` when standard input is not a terminal or its mode can't be
/// changed.
pub fn suppress_echo_on_terminal() -> Option<EchoSuppression> {
    #[cfg(unix)]
    {
        suppress_echo_on(libc::STDIN_FILENO)
    }
    #[cfg(not(unix))]
    {
        None
    }
}

/// Suppresses echo on the terminal behind `fd`.
///
/// Returns `None` when `fd` is not a terminal or its mode can't be changed.
/// The descriptor must stay open for the lifetime of the returned value.
#[cfg(unix)]
pub fn suppress_echo_on(fd: std::os::fd::RawFd) -> Option<EchoSuppression> {
    EchoSuppression::begin(fd)
}
