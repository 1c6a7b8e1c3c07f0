// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ffi::CStr;
use core::ptr;

use crate::error::PageError;

#[cfg(any(target_os = "linux", target_os = "android"))]
const PR_SET_VMA: libc::c_int = 0x53564d41;
#[cfg(any(target_os = "linux", target_os = "android"))]
const PR_SET_VMA_ANON_NAME: libc::c_ulong = 0;

#[cfg(target_os = "freebsd")]
const MAP_FLAGS: libc::c_int = libc::MAP_PRIVATE | libc::MAP_ANON | libc::MAP_NOCORE;
#[cfg(not(target_os = "freebsd"))]
const MAP_FLAGS: libc::c_int = libc::MAP_PRIVATE | libc::MAP_ANON;

/// Maps `len` bytes of private anonymous read/write memory.
pub(crate) fn map(len: usize) -> Result<*mut u8, PageError> {
    let ptr = unsafe {
        libc::mmap(
            ptr::null_mut(),
            len,
            libc::PROT_READ | libc::PROT_WRITE,
            MAP_FLAGS,
            -1,
            0,
        )
    };

    if ptr == libc::MAP_FAILED {
        return Err(PageError::Create);
    }

    Ok(ptr as *mut u8)
}

pub(crate) fn unmap(ptr: *mut u8, len: usize) {
    unsafe { libc::munmap(ptr as *mut libc::c_void, len) };
}

/// Locks the range in RAM (prevents swapping to disk).
pub(crate) fn lock(ptr: *mut u8, len: usize) -> Result<(), PageError> {
    let failed = unsafe { libc::mlock(ptr as *const libc::c_void, len) } != 0;

    if failed {
        return Err(PageError::Lock);
    }

    Ok(())
}

pub(crate) fn unlock(ptr: *mut u8, len: usize) {
    unsafe { libc::munlock(ptr as *const libc::c_void, len) };
}

/// Sets the range to PROT_NONE (no read/write access).
pub(crate) fn protect(ptr: *mut u8, len: usize) -> Result<(), PageError> {
    let failed =
        unsafe { libc::mprotect(ptr as *mut libc::c_void, len, libc::PROT_NONE) } != 0;

    if failed {
        return Err(PageError::Protect);
    }

    Ok(())
}

/// Sets the range to PROT_READ | PROT_WRITE.
pub(crate) fn unprotect(ptr: *mut u8, len: usize) -> Result<(), PageError> {
    let failed = unsafe {
        libc::mprotect(
            ptr as *mut libc::c_void,
            len,
            libc::PROT_READ | libc::PROT_WRITE,
        )
    } != 0;

    if failed {
        return Err(PageError::Unprotect);
    }

    Ok(())
}

/// Excludes the range from core dumps. Best effort.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) fn exclude_from_dumps(ptr: *mut u8, len: usize) {
    let rc = unsafe { libc::madvise(ptr as *mut libc::c_void, len, libc::MADV_DONTDUMP) };

    if rc != 0 {
        log::trace!("madvise(MADV_DONTDUMP) failed");
    }
}

// FreeBSD already gets MAP_NOCORE at mmap time
#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub(crate) fn exclude_from_dumps(_ptr: *mut u8, _len: usize) {}

/// Labels an anonymous range in `/proc/<pid>/maps`. Best effort.
///
/// Needs Linux 5.17+ built with `CONFIG_ANON_VMA_NAME`.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) fn name(ptr: *mut u8, len: usize, label: &CStr) {
    let rc = unsafe {
        libc::prctl(
            PR_SET_VMA,
            PR_SET_VMA_ANON_NAME,
            ptr as libc::c_ulong,
            len as libc::c_ulong,
            label.as_ptr(),
        )
    };

    if rc != 0 {
        log::trace!("prctl(PR_SET_VMA_ANON_NAME) failed");
    }
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
pub(crate) fn name(_ptr: *mut u8, _len: usize, _label: &CStr) {}

/// Returns how many of `requested` bytes the process may lock.
///
/// Raises the soft `RLIMIT_MEMLOCK` to the hard limit first, when allowed.
pub(crate) fn lockable_bytes(requested: usize) -> usize {
    let mut limits: libc::rlimit = unsafe { core::mem::zeroed() };

    if unsafe { libc::getrlimit(libc::RLIMIT_MEMLOCK, &mut limits) } != 0 {
        log::trace!("getrlimit(RLIMIT_MEMLOCK) failed");
        return 0;
    }

    if limits.rlim_cur < limits.rlim_max {
        let raised = libc::rlimit {
            rlim_cur: limits.rlim_max,
            rlim_max: limits.rlim_max,
        };

        if unsafe { libc::setrlimit(libc::RLIMIT_MEMLOCK, &raised) } == 0 {
            limits = raised;
        }
    }

    let soft = if limits.rlim_cur == libc::RLIM_INFINITY {
        usize::MAX
    } else {
        usize::try_from(limits.rlim_cur).unwrap_or(usize::MAX)
    };

    soft.min(requested)
}
