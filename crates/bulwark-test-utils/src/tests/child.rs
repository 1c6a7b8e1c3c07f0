// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ChildOutcome, run_in_child};

#[test]
fn test_run_in_child_clean_exit() {
    assert_eq!(run_in_child(|| {}), ChildOutcome::Exited(0));
}

#[test]
fn test_run_in_child_exit_code() {
    let outcome = run_in_child(|| unsafe { libc::_exit(3) });

    assert_eq!(outcome, ChildOutcome::Exited(3));
    assert!(!outcome.is_memory_fault());
}

#[test]
fn test_run_in_child_no_access_read_is_memory_fault() {
    let len = 4096;
    let ptr = unsafe {
        libc::mmap(
            core::ptr::null_mut(),
            len,
            libc::PROT_NONE,
            libc::MAP_PRIVATE | libc::MAP_ANON,
            -1,
            0,
        )
    };
    assert_ne!(ptr, libc::MAP_FAILED, "Failed to mmap(..)");

    let outcome = run_in_child(|| {
        let _ = unsafe { core::ptr::read_volatile(ptr as *const u8) };
    });

    unsafe { libc::munmap(ptr, len) };

    assert!(outcome.is_memory_fault(), "unexpected outcome: {outcome:?}");
}
