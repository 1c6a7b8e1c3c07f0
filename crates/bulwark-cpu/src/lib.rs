// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # bulwark_cpu
//!
//! Process, CPU capability and clock queries.
//!
//! Each platform backend implements [`SystemProbe`]. The free functions of
//! this crate forward to [`NativeProbe`], chosen at build time:
//!
//! - Unix: [`UnixProbe`] (libc: `getauxval`, `clock_gettime`, `sysconf`)
//! - everything else: [`PortableProbe`] (`std` only)
//!
//! [`PortableProbe`] is available on every platform, so callers and tests can
//! pin the portable behaviour explicitly.
//!
//! ## Degradation
//!
//! Missing facilities never fail: no cycle counter reads `0`, no capability
//! discovery is `None`, an unknown page size is `4096`. The one exception is
//! [`system_timestamp_ns`], which reports [`ClockError::NotImplemented`] when
//! the crate is built without the `rtc` feature.
//!
//! ## Example
//!
//! ```rust
//! let start = bulwark_cpu::high_resolution_clock();
//! let cpus = bulwark_cpu::available_cpus();
//! let elapsed = bulwark_cpu::high_resolution_clock().wrapping_sub(start);
//!
//! assert!(cpus >= 1);
//! let _ = elapsed;
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod cycles;
mod error;
mod portable;
mod thread;
mod time_format;
mod traits;

#[cfg(unix)]
mod unix;

use std::sync::OnceLock;
use std::time::Instant;

pub use error::ClockError;
pub use portable::PortableProbe;
pub use thread::set_thread_name;
pub use time_format::format_time;
pub use traits::{HwCaps, SystemProbe};

#[cfg(unix)]
pub use unix::UnixProbe;

/// Backend used by the free functions of this crate.
#[cfg(unix)]
pub type NativeProbe = UnixProbe;

/// Backend used by the free functions of this crate.
#[cfg(not(unix))]
pub type NativeProbe = PortableProbe;

/// Page size reported when the platform can't tell.
pub const DEFAULT_PAGE_SIZE: usize = 4096;

static GENERIC_CLOCK_BASE: OnceLock<Instant> = OnceLock::new();

/// Nanoseconds elapsed since the first call in this process, plus one.
///
/// Last link of the `high_resolution_clock` chain.
pub(crate) fn generic_clock() -> u64 {
    let base = GENERIC_CLOCK_BASE.get_or_init(Instant::now);
    let elapsed = u64::try_from(base.elapsed().as_nanos()).unwrap_or(u64::MAX);

    // 0 is reserved for "no clock source"
    elapsed.saturating_add(1)
}

/// Process id assigned by the OS, or `0` on systems without processes.
pub fn process_id() -> u32 {
    NativeProbe::default().process_id()
}

/// Hardware cycle counter, or `0` if none is readable without privilege.
pub fn cpu_cycle_counter() -> u64 {
    NativeProbe::default().cpu_cycle_counter()
}

/// Number of usable logical processors, at least `1`.
pub fn available_cpus() -> usize {
    NativeProbe::default().available_cpus()
}

/// `(AT_HWCAP, AT_HWCAP2)`-style capability masks, if the platform has them.
pub fn hardware_capabilities() -> Option<HwCaps> {
    NativeProbe::default().hardware_capabilities()
}

/// Best resolution timestamp available. See [`SystemProbe::high_resolution_clock`].
pub fn high_resolution_clock() -> u64 {
    NativeProbe::default().high_resolution_clock()
}

/// Wall clock in nanoseconds since the Unix epoch.
///
/// # Errors
///
/// [`ClockError::NotImplemented`] if built without the `rtc` feature.
pub fn system_timestamp_ns() -> Result<u64, ClockError> {
    NativeProbe::default().system_timestamp_ns()
}

/// Memory page size, or [`DEFAULT_PAGE_SIZE`] if it can't be determined.
pub fn page_size() -> usize {
    NativeProbe::default().page_size()
}
