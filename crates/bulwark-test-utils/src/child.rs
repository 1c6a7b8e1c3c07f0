// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// How a forked child terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildOutcome {
    /// The child called `_exit` with this status.
    Exited(i32),
    /// The child was killed by this signal.
    Signaled(i32),
}

impl ChildOutcome {
    /// Returns true if the child died from a memory access fault.
    ///
    /// Linux reports guard page hits as `SIGSEGV`; macOS and the BSDs may
    /// report them as `SIGBUS`.
    pub fn is_memory_fault(&self) -> bool {
        matches!(self, Self::Signaled(sig) if *sig == libc::SIGSEGV || *sig == libc::SIGBUS)
    }
}

/// Forks, runs `f` in the child and reports how the child terminated.
///
/// The child exits with status 0 if `f` returns. Core dumps are disabled in
/// the child so that expected crashes stay quiet.
///
/// Only async-signal-safe work should happen in `f`: the child of a
/// multi-threaded test process inherits a single thread.
pub fn run_in_child<F: FnOnce()>(f: F) -> ChildOutcome {
    match unsafe { libc::fork() } {
        -1 => panic!("Failed to fork()"),
        0 => {
            let no_core = libc::rlimit {
                rlim_cur: 0,
                rlim_max: 0,
            };
            unsafe { libc::setrlimit(libc::RLIMIT_CORE, &no_core) };

            f();

            unsafe { libc::_exit(0) }
        }
        child_pid => {
            let mut status: libc::c_int = 0;
            let rc = unsafe { libc::waitpid(child_pid, &mut status, 0) };
            assert_eq!(rc, child_pid, "Failed to waitpid(..)");

            if libc::WIFSIGNALED(status) {
                ChildOutcome::Signaled(libc::WTERMSIG(status))
            } else {
                ChildOutcome::Exited(libc::WEXITSTATUS(status))
            }
        }
    }
}
