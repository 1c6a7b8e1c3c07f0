// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! UnixProbe - libc backend.

use crate::DEFAULT_PAGE_SIZE;
use crate::cycles;
use crate::error::ClockError;
use crate::traits::{HwCaps, SystemProbe};

const NANOS_PER_SEC: u64 = 1_000_000_000;

/// Clocks tried for `monotonic_clock`, best first.
#[cfg(any(target_os = "linux", target_os = "android", target_vendor = "apple"))]
const MONOTONIC_CLOCKS: &[libc::clockid_t] = &[
    libc::CLOCK_MONOTONIC_RAW,
    libc::CLOCK_MONOTONIC,
    libc::CLOCK_PROCESS_CPUTIME_ID,
    libc::CLOCK_THREAD_CPUTIME_ID,
];

#[cfg(not(any(target_os = "linux", target_os = "android", target_vendor = "apple")))]
const MONOTONIC_CLOCKS: &[libc::clockid_t] = &[
    libc::CLOCK_MONOTONIC,
    libc::CLOCK_PROCESS_CPUTIME_ID,
    libc::CLOCK_THREAD_CPUTIME_ID,
];

/// Backend for Unix-like systems, built on libc.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnixProbe;

impl UnixProbe {
    pub(crate) fn read_clock(clock: libc::clockid_t) -> Option<libc::timespec> {
        let mut ts: libc::timespec = unsafe { core::mem::zeroed() };

        if unsafe { libc::clock_gettime(clock, &mut ts) } != 0 {
            return None;
        }

        Some(ts)
    }

    pub(crate) fn timespec_to_ns(ts: &libc::timespec) -> Option<u64> {
        let secs = u64::try_from(ts.tv_sec).ok()?;
        let nanos = u64::try_from(ts.tv_nsec).ok()?;

        secs.checked_mul(NANOS_PER_SEC)?.checked_add(nanos)
    }
}

impl SystemProbe for UnixProbe {
    fn process_id(&self) -> u32 {
        unsafe { libc::getpid() as u32 }
    }

    fn cpu_cycle_counter(&self) -> u64 {
        cycles::read()
    }

    fn available_cpus(&self) -> usize {
        // Honors affinity masks and cgroup quotas where the OS reports them
        if let Ok(n) = std::thread::available_parallelism() {
            return n.get();
        }

        let online = unsafe { libc::sysconf(libc::_SC_NPROCESSORS_ONLN) };

        usize::try_from(online).unwrap_or(0).max(1)
    }

    #[cfg(any(target_os = "linux", target_os = "android"))]
    fn hardware_capabilities(&self) -> Option<HwCaps> {
        let primary = unsafe { libc::getauxval(libc::AT_HWCAP) };
        let secondary = unsafe { libc::getauxval(libc::AT_HWCAP2) };

        Some(HwCaps {
            primary: primary as u64,
            secondary: secondary as u64,
        })
    }

    #[cfg(target_os = "freebsd")]
    fn hardware_capabilities(&self) -> Option<HwCaps> {
        fn aux(kind: libc::c_int) -> u64 {
            let mut value: libc::c_ulong = 0;
            let rc = unsafe {
                libc::elf_aux_info(
                    kind,
                    &mut value as *mut libc::c_ulong as *mut libc::c_void,
                    core::mem::size_of::<libc::c_ulong>() as libc::c_int,
                )
            };

            if rc == 0 { value as u64 } else { 0 }
        }

        Some(HwCaps {
            primary: aux(libc::AT_HWCAP),
            secondary: aux(libc::AT_HWCAP2),
        })
    }

    #[cfg(not(any(target_os = "linux", target_os = "android", target_os = "freebsd")))]
    fn hardware_capabilities(&self) -> Option<HwCaps> {
        None
    }

    fn monotonic_clock(&self) -> Option<u64> {
        let found = MONOTONIC_CLOCKS
            .iter()
            .find_map(|&clock| Self::read_clock(clock).and_then(|ts| Self::timespec_to_ns(&ts)));

        if found.is_none() {
            log::debug!("no clock_gettime clock available, using generic clock");
        }

        found
    }

    #[cfg(feature = "rtc")]
    fn system_timestamp_ns(&self) -> Result<u64, ClockError> {
        let ts = Self::read_clock(libc::CLOCK_REALTIME).ok_or(ClockError::Unavailable)?;

        if ts.tv_sec < 0 {
            return Err(ClockError::BeforeEpoch);
        }

        Self::timespec_to_ns(&ts).ok_or(ClockError::Unavailable)
    }

    #[cfg(not(feature = "rtc"))]
    fn system_timestamp_ns(&self) -> Result<u64, ClockError> {
        Err(ClockError::NotImplemented)
    }

    fn page_size(&self) -> usize {
        let size = unsafe { libc::sysconf(libc::_SC_PAGESIZE) };

        if size > 1 {
            size as usize
        } else {
            DEFAULT_PAGE_SIZE
        }
    }
}
