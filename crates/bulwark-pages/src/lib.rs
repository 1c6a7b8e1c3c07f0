// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # bulwark_pages
//!
//! Whole pages of memory for secret material:
//!
//! - locked with `mlock` so they are never written to swap
//! - excluded from core dumps where the OS allows it
//! - preceded and followed by `PROT_NONE` guard pages, so an overrun faults
//!   instead of silently touching a neighbour
//! - scrubbed before being returned to the kernel
//!
//! This is not a general-purpose allocator: callers such as a locked memory
//! pool carve their objects out of the pages themselves.
//!
//! ## Degradation
//!
//! Asking for `n` pages returns between `0` and `n`. An empty batch means
//! locking is unavailable: unsupported platform, `BULWARK_MLOCK_POOL_SIZE=0`,
//! exhausted `RLIMIT_MEMLOCK`, or a denied `mmap`/`mlock`.
//!
//! ## Example
//!
//! ```rust
//! use bulwark_pages::{allocate_locked_pages, free_locked_pages, page_allow_access, page_prohibit_access};
//!
//! let mut pages = allocate_locked_pages(2);
//! assert!(pages.len() <= 2);
//!
//! if let Some(page) = pages.get_mut(0) {
//!     unsafe { page.as_mut_slice()[0] = 0x42 };
//!
//!     page_prohibit_access(page).expect("Failed to page_prohibit_access(..)");
//!     // Secret is unreadable here
//!     page_allow_access(page).expect("Failed to page_allow_access(..)");
//!
//!     assert_eq!(unsafe { page.as_slice()[0] }, 0x42);
//! }
//!
//! // Scrubbed, unlocked and unmapped
//! free_locked_pages(pages);
//! ```

#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod allocator;
mod batch;
mod error;
mod limit;
mod page;
mod sys;

pub use allocator::LockedPageAllocator;
pub use batch::LockedPages;
pub use error::PageError;
pub use limit::{MAX_MLOCK_POOL_KIB, MLOCK_POOL_SIZE_ENV, memory_locking_limit};
pub use page::{LockedPage, PAGE_LABEL};

/// Requests `count` guarded pages locked into memory.
///
/// Returns fewer pages than requested (possibly none) rather than failing.
/// Contents are undefined. See [`LockedPageAllocator::allocate`].
pub fn allocate_locked_pages(count: usize) -> LockedPages {
    LockedPageAllocator::from_env().allocate(count)
}

/// Releases a batch returned by [`allocate_locked_pages`].
///
/// Every page is made accessible if needed, scrubbed, unlocked and unmapped
/// along with its guard pages. Failures are ignored.
pub fn free_locked_pages(pages: LockedPages) {
    drop(pages);
}

/// Makes a page inaccessible (`PROT_NONE`). Contents are preserved.
pub fn page_prohibit_access(page: &LockedPage) -> Result<(), PageError> {
    page.protect()
}

/// Makes a page readable and writable again. Contents are preserved.
pub fn page_allow_access(page: &LockedPage) -> Result<(), PageError> {
    page.unprotect()
}

/// Attaches the [`PAGE_LABEL`] to the first `size` bytes of the page.
///
/// Debugging aid only: no effect on protection or contents. Linux only,
/// silently ignored elsewhere or when the kernel lacks support.
pub fn page_named(page: &LockedPage, size: usize) {
    page.name(size);
}
