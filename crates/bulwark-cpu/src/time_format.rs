// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Local time formatting via `strftime`.

use crate::error::ClockError;

/// Largest expansion accepted before giving up with `InvalidFormat`.
#[cfg(unix)]
const MAX_FORMATTED_LEN: usize = 4096;

#[cfg(unix)]
const SENTINEL: char = '|';

/// Formats a Unix timestamp as local time using `strftime` conversion specifiers.
///
/// # Errors
///
/// - [`ClockError::InvalidFormat`] if `format` contains a NUL byte or expands
///   to more than 4 KiB.
/// - [`ClockError::InvalidTime`] if the timestamp has no local time
///   representation.
/// - [`ClockError::NotImplemented`] on non-Unix platforms.
///
/// # Example
///
/// ```
/// # #[cfg(unix)]
/// # {
/// let year = bulwark_cpu::format_time(86_400 * 500, "%Y").expect("Failed to format_time(..)");
/// assert_eq!(year, "1971");
/// # }
/// ```
#[cfg(unix)]
pub fn format_time(time: i64, format: &str) -> Result<String, ClockError> {
    use std::ffi::CString;

    if format.contains('\0') {
        return Err(ClockError::InvalidFormat);
    }

    let time: libc::time_t = time.try_into().map_err(|_| ClockError::InvalidTime)?;

    let mut tm: libc::tm = unsafe { core::mem::zeroed() };
    if unsafe { libc::localtime_r(&time, &mut tm) }.is_null() {
        return Err(ClockError::InvalidTime);
    }

    if format.is_empty() {
        return Ok(String::new());
    }

    // strftime returns 0 both for "did not fit" and for an empty expansion.
    // A trailing sentinel keeps every successful expansion non-empty.
    let c_format = CString::new(format!("{format}{SENTINEL}")).map_err(|_| ClockError::InvalidFormat)?;

    // Expansion, sentinel and the terminating NUL
    let limit = MAX_FORMATTED_LEN + SENTINEL.len_utf8() + 1;

    let mut capacity = 64;
    loop {
        let mut buf = vec![0u8; capacity];
        let written = unsafe {
            libc::strftime(
                buf.as_mut_ptr() as *mut libc::c_char,
                buf.len(),
                c_format.as_ptr(),
                &tm,
            )
        };

        if written > 0 {
            buf.truncate(written - SENTINEL.len_utf8());
            return String::from_utf8(buf).map_err(|_| ClockError::InvalidFormat);
        }

        if capacity >= limit {
            break;
        }

        capacity = (capacity * 4).min(limit);
    }

    Err(ClockError::InvalidFormat)
}

/// Formats a Unix timestamp as local time.
///
/// Always fails with [`ClockError::NotImplemented`]: this platform has no
/// `strftime`.
#[cfg(not(unix))]
pub fn format_time(time: i64, format: &str) -> Result<String, ClockError> {
    let _ = (time, format);
    Err(ClockError::NotImplemented)
}
