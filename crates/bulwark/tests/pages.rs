// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Locked pages driven through the facade and the real environment.

use serial_test::serial;

use bulwark::cpu::page_size;
use bulwark::pages::{
    MLOCK_POOL_SIZE_ENV, MAX_MLOCK_POOL_KIB, allocate_locked_pages, free_locked_pages,
    memory_locking_limit, page_allow_access, page_named, page_prohibit_access,
};
use bulwark::util::{is_slice_filled_with, scrub};

struct ScopedVar(&'static str);

impl ScopedVar {
    fn set(name: &'static str, value: &str) -> Self {
        unsafe { std::env::set_var(name, value) };
        Self(name)
    }
}

impl Drop for ScopedVar {
    fn drop(&mut self) {
        unsafe { std::env::remove_var(self.0) };
    }
}

#[test]
#[serial(env)]
fn test_disabled_locking_yields_no_pages() {
    let _var = ScopedVar::set(MLOCK_POOL_SIZE_ENV, "0");

    assert_eq!(memory_locking_limit(), 0);

    let pages = allocate_locked_pages(4);
    assert!(pages.is_empty());

    free_locked_pages(pages);
}

#[test]
#[serial(env)]
fn test_limit_never_exceeds_max_pool() {
    let _var = ScopedVar::set(MLOCK_POOL_SIZE_ENV, "99999999");

    assert!(memory_locking_limit() <= MAX_MLOCK_POOL_KIB * 1024);
}

#[test]
#[serial(env)]
fn test_page_lifecycle() {
    unsafe { std::env::remove_var(MLOCK_POOL_SIZE_ENV) };

    let mut pages = allocate_locked_pages(2);
    assert!(pages.len() <= 2);

    if memory_locking_limit() >= 2 * page_size() {
        assert_eq!(pages.len(), 2, "lockable pages were not allocated");
    } else {
        eprintln!("locking budget below two pages: lifecycle checks skipped");
    }

    for page in &mut pages {
        let slice = unsafe { page.as_mut_slice() };
        slice.fill(0xC3);

        page_named(page, page.len() / 2);
        page_prohibit_access(page).expect("Failed to page_prohibit_access(..)");
        page_allow_access(page).expect("Failed to page_allow_access(..)");

        assert!(is_slice_filled_with(unsafe { page.as_slice() }, 0xC3));

        scrub(unsafe { page.as_mut_slice() });
        page_prohibit_access(page).expect("Failed to page_prohibit_access(..)");
    }

    // Protected pages are released without faulting
    free_locked_pages(pages);
}

#[test]
#[serial(env)]
fn test_default_budget_allocates_one_page() {
    unsafe { std::env::remove_var(MLOCK_POOL_SIZE_ENV) };

    let limit = memory_locking_limit();

    if limit < page_size() {
        eprintln!("locking budget is {limit} bytes, below one page: skipping");
        return;
    }

    let pages = allocate_locked_pages(1);

    assert_eq!(pages.len(), 1);
    assert!(!pages.get(0).expect("Failed to get(0)").is_protected());

    free_locked_pages(pages);
}
