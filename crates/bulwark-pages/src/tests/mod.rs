// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


/// Returns `true` if `RLIMIT_MEMLOCK` covers `pages` pages, explaining the skip otherwise.
///
/// Tests that need real locked pages must assert allocation succeeds when this
/// holds, so an allocator that silently returns nothing can't pass them.
pub(crate) fn can_lock_pages(pages: usize) -> bool {
    let needed = pages * bulwark_cpu::page_size();
    let lockable = crate::sys::lockable_bytes(needed);

    if lockable < needed {
        eprintln!("RLIMIT_MEMLOCK allows {lockable} bytes, {needed} needed: skipping");
        return false;
    }

    true
}
