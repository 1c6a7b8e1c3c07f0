// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Unprivileged hardware cycle counters.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
use core::sync::atomic::{AtomicU8, Ordering};

#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::_rdtsc;

#[cfg(target_arch = "x86")]
use core::arch::x86::_rdtsc;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const TSC_UNKNOWN: u8 = 0;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const TSC_USABLE: u8 = 1;
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
const TSC_UNUSABLE: u8 = 2;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
static TSC_STATE: AtomicU8 = AtomicU8::new(TSC_UNKNOWN);

/// Returns whether `rdtsc` can run without faulting.
///
/// Checked once per process: the answer costs a `prctl` syscall on Linux and
/// the clock is read far more often than it can change. A process that later
/// calls `prctl(PR_SET_TSC, PR_TSC_SIGSEGV)` on itself must stop using the
/// cycle counter.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) fn tsc_usable() -> bool {
    match TSC_STATE.load(Ordering::Acquire) {
        TSC_USABLE => true,
        TSC_UNUSABLE => false,
        _ => {
            let usable = std::is_x86_feature_detected!("tsc") && !tsc_disabled_for_process();
            let state = if usable { TSC_USABLE } else { TSC_UNUSABLE };
            TSC_STATE.store(state, Ordering::Release);

            usable
        }
    }
}

#[cfg(all(test, any(target_arch = "x86", target_arch = "x86_64")))]
pub(crate) fn tsc_state_is_cached() -> bool {
    TSC_STATE.load(Ordering::Acquire) != TSC_UNKNOWN
}

/// Reads the time stamp counter, or `0` if executing `rdtsc` would fault.
#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) fn read() -> u64 {
    if !tsc_usable() {
        return 0;
    }

    unsafe { _rdtsc() }
}

/// Reads the virtual counter, always accessible from EL0 on supported OSes.
#[cfg(target_arch = "aarch64")]
pub(crate) fn read() -> u64 {
    let value: u64;
    unsafe {
        core::arch::asm!(
            "mrs {}, cntvct_el0",
            out(reg) value,
            options(nomem, nostack, preserves_flags)
        );
    }
    value
}

#[cfg(not(any(target_arch = "x86", target_arch = "x86_64", target_arch = "aarch64")))]
pub(crate) fn read() -> u64 {
    0
}

// prctl(PR_SET_TSC, PR_TSC_SIGSEGV) turns rdtsc into SIGSEGV.
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    any(target_os = "linux", target_os = "android")
))]
fn tsc_disabled_for_process() -> bool {
    let mut state: libc::c_int = 0;
    let rc = unsafe { libc::prctl(libc::PR_GET_TSC, &mut state as *mut libc::c_int, 0, 0, 0) };

    rc == 0 && state == libc::PR_TSC_SIGSEGV
}

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    not(any(target_os = "linux", target_os = "android"))
))]
fn tsc_disabled_for_process() -> bool {
    false
}
