// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SIGILL interception through the C shim.

use core::ffi::{c_int, c_void};
use core::marker::PhantomData;
use core::mem;
use core::ptr;

use crate::error::ProbeError;

unsafe extern "C" {
    /// Handler that jumps back into the pending [`bulwark_probe_call`].
    fn bulwark_probe_sigill_handler(sig: c_int);

    /// Calls `probe(ctx)` under a `sigsetjmp` landing pad.
    ///
    /// # Safety
    ///
    /// - `result` must be valid for writes
    /// - the handler above must be installed for `SIGILL`
    /// - `probe` must not own values with destructors across the faulting point
    fn bulwark_probe_call(
        probe: unsafe extern "C" fn(*mut c_void) -> c_int,
        ctx: *mut c_void,
        result: *mut c_int,
    ) -> c_int;
}

/// Installs the shim's SIGILL handler and restores the previous one on drop.
pub(crate) struct HandlerGuard {
    previous: libc::sigaction,
    // Signal dispositions are per process but the guard belongs to one scope
    _not_send: PhantomData<*const ()>,
}

impl HandlerGuard {
    pub(crate) fn install() -> Result<Self, ProbeError> {
        let mut action: libc::sigaction = unsafe { mem::zeroed() };
        action.sa_sigaction = bulwark_probe_sigill_handler as unsafe extern "C" fn(c_int) as usize;
        action.sa_flags = 0;
        unsafe { libc::sigemptyset(&mut action.sa_mask) };

        let mut previous: libc::sigaction = unsafe { mem::zeroed() };

        if unsafe { libc::sigaction(libc::SIGILL, &action, &mut previous) } != 0 {
            return Err(ProbeError::HandlerInstall);
        }

        Ok(Self {
            previous,
            _not_send: PhantomData,
        })
    }
}

impl Drop for HandlerGuard {
    fn drop(&mut self) {
        if unsafe { libc::sigaction(libc::SIGILL, &self.previous, ptr::null_mut()) } != 0 {
            log::trace!("failed to restore previous SIGILL disposition");
        }
    }
}

unsafe extern "C" fn trampoline(ctx: *mut c_void) -> c_int {
    let probe = unsafe { *(ctx as *const fn() -> i32) };
    probe()
}

/// Runs `probe` with the handler in place. Caller holds the guard.
pub(crate) fn call(_guard: &HandlerGuard, probe: fn() -> i32) -> Result<i32, ProbeError> {
    let mut probe = probe;
    let mut result: c_int = 0;

    let faulted = unsafe {
        bulwark_probe_call(
            trampoline,
            &mut probe as *mut fn() -> i32 as *mut c_void,
            &mut result,
        )
    };

    if faulted != 0 {
        return Err(ProbeError::Faulted);
    }

    Ok(result)
}
