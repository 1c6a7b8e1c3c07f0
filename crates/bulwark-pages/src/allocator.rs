// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::batch::LockedPages;
use crate::limit::memory_locking_limit;
use crate::page::LockedPage;

/// Hands out guarded, locked pages within a byte budget.
#[derive(Debug, Clone, Copy)]
pub struct LockedPageAllocator {
    limit: usize,
    page_size: usize,
}

impl LockedPageAllocator {
    /// Creates an allocator that locks at most `limit` bytes per call.
    ///
    /// A limit of `0` disables locking entirely.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            page_size: bulwark_cpu::page_size(),
        }
    }

    /// Creates an allocator bounded by [`memory_locking_limit`].
    pub fn from_env() -> Self {
        Self::new(memory_locking_limit())
    }

    /// Byte budget of this allocator.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Size of each page handed out.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Most pages a single call can return.
    pub fn max_pages(&self) -> usize {
        self.limit / self.page_size
    }

    /// Allocates up to `count` locked pages.
    ///
    /// Returns fewer pages than requested (possibly none) when the budget is
    /// smaller than the request or the OS refuses to map or lock a page.
    /// Neither case is an error.
    pub fn allocate(&self, count: usize) -> LockedPages {
        if count == 0 {
            return LockedPages::default();
        }

        if self.limit == 0 {
            log::debug!("memory locking disabled, no pages allocated");
            return LockedPages::default();
        }

        let target = count.min(self.max_pages());
        let mut pages = Vec::with_capacity(target);

        for _ in 0..target {
            match LockedPage::new_guarded(self.page_size) {
                Ok(page) => pages.push(page),
                Err(e) => log::trace!("skipping locked page: {e}"),
            }
        }

        if pages.len() < count {
            log::debug!(
                "allocated {} of {} requested locked pages",
                pages.len(),
                count
            );
        }

        LockedPages::new(pages)
    }
}
