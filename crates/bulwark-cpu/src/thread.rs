// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::thread::JoinHandle;

/// Kernel limit for thread names, excluding the NUL terminator.
#[cfg(any(target_os = "linux", target_os = "android"))]
const MAX_THREAD_NAME_LEN: usize = 15;

/// Gives a running thread an OS-visible name (shown by `top`, `gdb`, ...).
///
/// Best effort: names longer than the kernel limit are truncated on a
/// character boundary, names with interior NULs are ignored, and platforms
/// without `pthread_setname_np` do nothing.
pub fn set_thread_name<T>(handle: &JoinHandle<T>, name: &str) {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    {
        use std::ffi::CString;
        use std::os::unix::thread::JoinHandleExt;

        let Ok(c_name) = CString::new(truncate_name(name)) else {
            log::trace!("thread name contains NUL, not applied");
            return;
        };

        let rc = unsafe { libc::pthread_setname_np(handle.as_pthread_t(), c_name.as_ptr()) };
        if rc != 0 {
            log::trace!("pthread_setname_np failed: {rc}");
        }
    }

    #[cfg(not(any(target_os = "linux", target_os = "android")))]
    {
        let _ = (handle, name);
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) fn truncate_name(name: &str) -> &str {
    if name.len() <= MAX_THREAD_NAME_LEN {
        return name;
    }

    let mut end = MAX_THREAD_NAME_LEN;
    while !name.is_char_boundary(end) {
        end -= 1;
    }

    &name[..end]
}
