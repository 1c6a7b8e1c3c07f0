// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # bulwark_probe
//!
//! Runs a short CPU instruction probe and survives it if the CPU rejects the
//! instruction.
//!
//! Feature detection by execution: try the instruction, and if the kernel
//! delivers `SIGILL` the feature is absent. The harness installs a temporary
//! `SIGILL` handler that jumps back out of the faulting probe, then restores
//! whatever disposition was there before.
//!
//! ## Example
//!
//! ```rust
//! use bulwark_probe::{PROBE_UNSUPPORTED, run_instruction_probe};
//!
//! fn probe_nop() -> i32 {
//!     1
//! }
//!
//! let result = run_instruction_probe(probe_nop);
//! assert!(result == 1 || result == PROBE_UNSUPPORTED);
//! ```
//!
//! ## Caveats
//!
//! - Not for concurrent use: one probe at a time per process. A second caller
//!   gets [`ProbeError::Busy`] instead of racing on the global handler.
//! - Probes are plain `fn` pointers. A fault skips the rest of the probe, so
//!   it must not hold anything that needs dropping.
//! - A panic inside a probe aborts the process.

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
#[cfg(unix)]
mod in_flight;
#[cfg(unix)]
mod unix;

pub use error::ProbeError;

#[cfg(unix)]
use in_flight::InFlight;

/// Returned by [`run_instruction_probe`] when the probe raised `SIGILL`.
pub const PROBE_FAULTED: i32 = -1;

/// Returned by [`run_instruction_probe`] when the handler could not be
/// installed or another probe was running.
pub const PROBE_UNAVAILABLE: i32 = -2;

/// Returned by [`run_instruction_probe`] on platforms without fault isolation.
pub const PROBE_UNSUPPORTED: i32 = -3;

/// Runs `probe` under a `SIGILL` trap and reports how it went.
///
/// Returns the probe's own value on normal completion, negative values
/// included, or the [`ProbeError`] explaining why there is none. The previous
/// `SIGILL` disposition is restored on every path.
#[cfg(unix)]
pub fn try_run_instruction_probe(probe: fn() -> i32) -> Result<i32, ProbeError> {
    let _in_flight = InFlight::acquire().inspect_err(|_| {
        log::debug!("instruction probe refused: another probe is running");
    })?;

    let handler = unix::HandlerGuard::install().inspect_err(|_| {
        log::debug!("instruction probe refused: cannot install SIGILL handler");
    })?;

    unix::call(&handler, probe)
}

/// Runs `probe` under a `SIGILL` trap and reports how it went.
///
/// No fault isolation on this platform: always [`ProbeError::Unsupported`].
#[cfg(not(unix))]
pub fn try_run_instruction_probe(_probe: fn() -> i32) -> Result<i32, ProbeError> {
    log::debug!("instruction probe refused: unsupported platform");
    Err(ProbeError::Unsupported)
}

/// Runs `probe` under a `SIGILL` trap, folding failures into sentinels.
///
/// - normal completion: the probe's return value, unchanged
/// - illegal instruction: [`PROBE_FAULTED`]
/// - handler unavailable or probe already running: [`PROBE_UNAVAILABLE`]
/// - unsupported platform: [`PROBE_UNSUPPORTED`]
///
/// Use [`try_run_instruction_probe`] when the probe itself may return one of
/// these values.
pub fn run_instruction_probe(probe: fn() -> i32) -> i32 {
    try_run_instruction_probe(probe).unwrap_or_else(ProbeError::sentinel)
}
