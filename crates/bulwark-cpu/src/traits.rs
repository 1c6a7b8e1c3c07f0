// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ClockError;
use crate::generic_clock;

/// Hardware capability bit masks reported by the platform.
///
/// On Linux these are the `AT_HWCAP` and `AT_HWCAP2` auxiliary vector
/// entries. Bit meanings are architecture specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HwCaps {
    /// Primary mask (`AT_HWCAP`).
    pub primary: u64,
    /// Secondary mask (`AT_HWCAP2`).
    pub secondary: u64,
}

impl HwCaps {
    /// Returns the masks as a `(primary, secondary)` pair.
    pub fn as_pair(&self) -> (u64, u64) {
        (self.primary, self.secondary)
    }
}

/// Process, CPU and clock queries for one platform backend.
///
/// Every method is a pure read: implementations hold no state and can be
/// called from any thread. Backends that lack a facility degrade to the
/// documented neutral value instead of failing.
pub trait SystemProbe {
    /// Process id assigned by the OS, or `0` where processes don't exist.
    fn process_id(&self) -> u32;

    /// Hardware cycle counter, or `0` if none is readable without privilege.
    fn cpu_cycle_counter(&self) -> u64;

    /// Usable logical processors. Never less than `1`.
    fn available_cpus(&self) -> usize;

    /// Capability masks, or `None` if the platform has no discovery mechanism.
    fn hardware_capabilities(&self) -> Option<HwCaps>;

    /// OS monotonic clock in nanoseconds, if the OS exposes one.
    fn monotonic_clock(&self) -> Option<u64>;

    /// Nanoseconds since the Unix epoch from the real-time clock.
    fn system_timestamp_ns(&self) -> Result<u64, ClockError>;

    /// Memory page size in bytes.
    fn page_size(&self) -> usize;

    /// Best resolution timestamp available.
    ///
    /// Tries the cycle counter, then the OS monotonic clock, then the generic
    /// `std` clock. Epoch and tick rate are arbitrary: only differences
    /// between two readings from the same source are meaningful.
    fn high_resolution_clock(&self) -> u64 {
        let cycles = self.cpu_cycle_counter();
        if cycles != 0 {
            return cycles;
        }

        if let Some(ns) = self.monotonic_clock() {
            return ns;
        }

        generic_clock()
    }
}
