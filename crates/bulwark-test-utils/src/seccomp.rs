// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use libseccomp::{ScmpAction, ScmpFilterContext, ScmpSyscall};

use crate::child::{ChildOutcome, run_in_child};

/// Returns `true` if this process may load seccomp filters.
///
/// The trial filter is loaded in a forked child, so the caller stays
/// unfiltered. QEMU user mode and some container runtimes refuse it.
pub fn is_seccomp_available() -> bool {
    let outcome = run_in_child(|| {
        let loaded = ScmpFilterContext::new(ScmpAction::Allow)
            .and_then(|filter| filter.load())
            .is_ok();

        unsafe { libc::_exit(if loaded { 0 } else { 1 }) };
    });

    outcome == ChildOutcome::Exited(0)
}

/// Makes every later call to the named syscall fail with `EPERM`.
///
/// Irreversible for the calling process and inherited by its children: use
/// from subprocess tests or forked children only.
pub fn block_syscall(name: &str) {
    let syscall =
        ScmpSyscall::from_name(name).unwrap_or_else(|e| panic!("Unknown syscall {name}: {e}"));

    let mut filter =
        ScmpFilterContext::new(ScmpAction::Allow).expect("Failed to ScmpFilterContext::new(..)");
    filter
        .add_rule(ScmpAction::Errno(libc::EPERM), syscall)
        .expect("Failed to add_rule(..)");
    filter.load().expect("Failed to load()");
}

/// Page locking fails from now on.
pub fn block_mlock() {
    block_syscall("mlock");
}

/// Protection changes fail from now on, guard page setup included.
pub fn block_mprotect() {
    block_syscall("mprotect");
}

/// `madvise` hints (`MADV_DONTDUMP`) fail from now on.
pub fn block_madvise() {
    block_syscall("madvise");
}
