// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for the SIGILL probe harness.

use core::mem;
use core::ptr;

use serial_test::serial;

use crate::in_flight::is_idle;
use crate::{PROBE_FAULTED, PROBE_UNAVAILABLE, ProbeError, run_instruction_probe, try_run_instruction_probe};

fn probe_five() -> i32 {
    5
}

fn probe_negative() -> i32 {
    -1234
}

fn probe_nested() -> i32 {
    match try_run_instruction_probe(probe_five) {
        Err(ProbeError::Busy) => 77,
        _ => 0,
    }
}

fn probe_nested_sentinel() -> i32 {
    run_instruction_probe(probe_five)
}

#[cfg(target_arch = "x86_64")]
fn probe_illegal() -> i32 {
    unsafe { core::arch::asm!("ud2", options(noreturn)) }
}

#[cfg(target_arch = "aarch64")]
fn probe_illegal() -> i32 {
    unsafe { core::arch::asm!("udf #0", options(noreturn)) }
}

fn current_sigill_handler() -> libc::sighandler_t {
    let mut current: libc::sigaction = unsafe { mem::zeroed() };
    let rc = unsafe { libc::sigaction(libc::SIGILL, ptr::null(), &mut current) };
    assert_eq!(rc, 0, "Failed to sigaction(..)");

    current.sa_sigaction
}

// =============================================================================
// normal completion
// =============================================================================

#[test]
#[serial(probe)]
fn test_probe_value_passes_through() {
    assert_eq!(run_instruction_probe(probe_five), 5);
    assert_eq!(try_run_instruction_probe(probe_five), Ok(5));
}

#[test]
#[serial(probe)]
fn test_probe_negative_value_preserved() {
    assert_eq!(run_instruction_probe(probe_negative), -1234);
}

#[test]
#[serial(probe)]
fn test_probe_restores_previous_handler() {
    let before = current_sigill_handler();

    assert_eq!(run_instruction_probe(probe_five), 5);

    assert_eq!(current_sigill_handler(), before);
    assert!(is_idle());
}

// =============================================================================
// re-entrancy
// =============================================================================

#[test]
#[serial(probe)]
fn test_nested_probe_is_busy() {
    assert_eq!(run_instruction_probe(probe_nested), 77);
    assert!(is_idle());
}

#[test]
#[serial(probe)]
fn test_nested_probe_sentinel_is_unavailable() {
    assert_eq!(run_instruction_probe(probe_nested_sentinel), PROBE_UNAVAILABLE);
}

// =============================================================================
// illegal instruction
// =============================================================================

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
mod illegal {
    use super::*;

    #[test]
    #[serial(probe)]
    fn test_illegal_instruction_is_intercepted() {
        assert_eq!(run_instruction_probe(probe_illegal), PROBE_FAULTED);
        assert_eq!(
            try_run_instruction_probe(probe_illegal),
            Err(ProbeError::Faulted)
        );
    }

    #[test]
    #[serial(probe)]
    fn test_illegal_instruction_restores_previous_handler() {
        let before = current_sigill_handler();

        assert_eq!(run_instruction_probe(probe_illegal), PROBE_FAULTED);

        assert_eq!(current_sigill_handler(), before);
        assert_eq!(before, libc::SIG_DFL);
        assert!(is_idle());
    }

    #[test]
    #[serial(probe)]
    fn test_repeated_faults_behave_identically() {
        for _ in 0..16 {
            assert_eq!(run_instruction_probe(probe_illegal), PROBE_FAULTED);
            assert_eq!(run_instruction_probe(probe_five), 5);
        }
    }
}
