// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! LockedPage - one mlock'd page between two PROT_NONE guard pages.
//!
//! Layout of the mapping backing a page:
//!
//! ```text
//! base                base + size           base + 2 * size
//! | guard (PROT_NONE) | data (locked, R/W)  | guard (PROT_NONE) |
//! ```
//!
//! Any access one byte before or after the data page hits a guard and
//! faults immediately.

use core::ffi::CStr;
use core::sync::atomic::{AtomicBool, Ordering};

use bulwark_util::scrub_raw;

use crate::error::PageError;
use crate::sys;

/// Label shown for locked pages in `/proc/<pid>/maps` (Linux).
pub const PAGE_LABEL: &CStr = c"bulwark locked pool";

/// One page locked in physical memory and bracketed by guard pages.
///
/// Obtained from [`allocate_locked_pages`](crate::allocate_locked_pages) as
/// part of a [`LockedPages`](crate::LockedPages) batch, and released with the
/// whole batch. Contents are undefined at allocation time.
///
/// Tracks its protection state internally, so that release can restore
/// access before scrubbing.
#[derive(Debug)]
pub struct LockedPage {
    base: *mut u8,
    data: *mut u8,
    len: usize,
    is_protected: AtomicBool,
}

unsafe impl Send for LockedPage {}
unsafe impl Sync for LockedPage {}

impl LockedPage {
    /// Maps three pages, locks the middle one and turns the outer two into guards.
    pub(crate) fn new_guarded(page_size: usize) -> Result<Self, PageError> {
        let total = page_size.checked_mul(3).ok_or(PageError::Create)?;
        let base = sys::map(total)?;
        let data = unsafe { base.add(page_size) };
        let trailing_guard = unsafe { data.add(page_size) };

        if let Err(e) = sys::lock(data, page_size) {
            sys::unmap(base, total);
            return Err(e);
        }

        sys::exclude_from_dumps(data, page_size);

        let guarded = sys::protect(base, page_size)
            .and_then(|_| sys::protect(trailing_guard, page_size));

        if guarded.is_err() {
            sys::unlock(data, page_size);
            sys::unmap(base, total);
            return Err(PageError::Guard);
        }

        sys::name(data, page_size, PAGE_LABEL);

        Ok(Self {
            base,
            data,
            len: page_size,
            is_protected: AtomicBool::new(false),
        })
    }

    /// Address of the first usable byte.
    pub fn as_ptr(&self) -> *mut u8 {
        self.data
    }

    /// Usable size in bytes: exactly one page.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false`: a page is never empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` while access is prohibited.
    pub fn is_protected(&self) -> bool {
        self.is_protected.load(Ordering::Acquire)
    }

    /// Returns a slice view of the page.
    ///
    /// # Safety
    /// Page must be accessible (not protected), otherwise SIGSEGV.
    pub unsafe fn as_slice(&self) -> &[u8] {
        unsafe { core::slice::from_raw_parts(self.data, self.len) }
    }

    /// Returns a mutable slice view of the page.
    ///
    /// # Safety
    /// Page must be accessible (not protected), otherwise SIGSEGV.
    pub unsafe fn as_mut_slice(&mut self) -> &mut [u8] {
        unsafe { core::slice::from_raw_parts_mut(self.data, self.len) }
    }

    /// Sets the page to PROT_NONE.
    pub(crate) fn protect(&self) -> Result<(), PageError> {
        sys::protect(self.data, self.len)?;
        self.is_protected.store(true, Ordering::Release);

        Ok(())
    }

    /// Sets the page to PROT_READ | PROT_WRITE.
    pub(crate) fn unprotect(&self) -> Result<(), PageError> {
        sys::unprotect(self.data, self.len)?;
        self.is_protected.store(false, Ordering::Release);

        Ok(())
    }

    /// Labels the first `size` bytes of the page (clamped to the page).
    pub(crate) fn name(&self, size: usize) {
        let size = size.min(self.len);

        if size > 0 {
            sys::name(self.data, size, PAGE_LABEL);
        }
    }

    fn dispose(&mut self) {
        // Best effort: if unprotect fails the page stays unreadable (safe)
        if self.is_protected() {
            let _ = self.unprotect();
        }

        if !self.is_protected() {
            unsafe { scrub_raw(self.data, self.len) };
        }

        sys::unlock(self.data, self.len);
        sys::unmap(self.base, self.len * 3);
    }
}

impl Drop for LockedPage {
    fn drop(&mut self) {
        self.dispose();
    }
}
