// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PortableProbe - `std`-only backend.
//!
//! Works everywhere `std` does. No capability discovery, no cycle counter,
//! no OS monotonic clock: `high_resolution_clock` lands on the generic clock.

use crate::DEFAULT_PAGE_SIZE;
use crate::error::ClockError;
use crate::traits::{HwCaps, SystemProbe};

/// Backend built only on the standard library.
#[derive(Debug, Default, Clone, Copy)]
pub struct PortableProbe;

impl SystemProbe for PortableProbe {
    fn process_id(&self) -> u32 {
        #[cfg(any(unix, windows))]
        {
            std::process::id()
        }

        #[cfg(not(any(unix, windows)))]
        {
            0
        }
    }

    fn cpu_cycle_counter(&self) -> u64 {
        0
    }

    fn available_cpus(&self) -> usize {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    }

    fn hardware_capabilities(&self) -> Option<HwCaps> {
        None
    }

    fn monotonic_clock(&self) -> Option<u64> {
        None
    }

    #[cfg(feature = "rtc")]
    fn system_timestamp_ns(&self) -> Result<u64, ClockError> {
        use std::time::{SystemTime, UNIX_EPOCH};

        let since_epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|_| ClockError::BeforeEpoch)?;

        u64::try_from(since_epoch.as_nanos()).map_err(|_| ClockError::Unavailable)
    }

    #[cfg(not(feature = "rtc"))]
    fn system_timestamp_ns(&self) -> Result<u64, ClockError> {
        Err(ClockError::NotImplemented)
    }

    fn page_size(&self) -> usize {
        DEFAULT_PAGE_SIZE
    }
}
