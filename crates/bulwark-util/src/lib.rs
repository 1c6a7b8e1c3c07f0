// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Scrubbing and verification helpers shared by the Bulwark crates.
//!
//! The allocator uses [`scrub`] to wipe locked pages before they are handed
//! back to the kernel. The remaining helpers exist mostly for tests that need
//! to fill or inspect page contents.

#![no_std]

/// Fills a byte slice with a repeating pattern byte.
///
/// # Example
///
/// ```
/// use bulwark_util::fill_bytes_with_pattern;
///
/// let mut buffer = [0u8; 8];
/// fill_bytes_with_pattern(&mut buffer, 0xAB);
/// assert!(buffer.iter().all(|&b| b == 0xAB));
/// ```
#[inline]
pub fn fill_bytes_with_pattern(slice: &mut [u8], pattern: u8) {
    for byte in slice.iter_mut() {
        *byte = pattern;
    }
}

/// Zeroes a byte slice in a way the optimizer cannot elide.
///
/// Uses `write_bytes` (memset) followed by a volatile read and a compiler
/// fence, so the store survives even when the memory is unmapped right after.
///
/// # Example
///
/// ```
/// use bulwark_util::{is_slice_zeroized, scrub};
///
/// let mut key = [0x5Au8; 32];
/// scrub(&mut key);
/// assert!(is_slice_zeroized(&key));
/// ```
#[inline(always)]
pub fn scrub(slice: &mut [u8]) {
    if slice.is_empty() {
        return;
    }

    unsafe { scrub_raw(slice.as_mut_ptr(), slice.len()) };
}

/// Zeroes `len` bytes starting at `ptr`.
///
/// # Safety
///
/// `ptr` must be valid for writes of `len` bytes.
#[inline(always)]
pub unsafe fn scrub_raw(ptr: *mut u8, len: usize) {
    if len == 0 {
        return;
    }

    unsafe {
        core::ptr::write_bytes(ptr, 0, len);
        // Volatile read keeps the memset alive
        core::ptr::read_volatile(ptr);
    }

    core::sync::atomic::compiler_fence(core::sync::atomic::Ordering::SeqCst);
}

/// Returns `true` if every byte of the slice is zero.
///
/// # Example
///
/// ```
/// use bulwark_util::is_slice_zeroized;
///
/// assert!(is_slice_zeroized(&[0u8; 10]));
/// assert!(!is_slice_zeroized(&[0u8, 1, 0, 0]));
/// ```
#[inline(always)]
pub fn is_slice_zeroized(slice: &[u8]) -> bool {
    slice.iter().all(|&b| b == 0)
}

/// Returns `true` if every byte of the slice equals `pattern`.
#[inline(always)]
pub fn is_slice_filled_with(slice: &[u8], pattern: u8) -> bool {
    slice.iter().all(|&b| b == pattern)
}
