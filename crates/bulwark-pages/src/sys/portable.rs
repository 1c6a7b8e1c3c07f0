// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! No page locking API: nothing is ever mapped.

use core::ffi::CStr;

use crate::error::PageError;

pub(crate) fn map(_len: usize) -> Result<*mut u8, PageError> {
    Err(PageError::Unsupported)
}

pub(crate) fn unmap(_ptr: *mut u8, _len: usize) {}

pub(crate) fn lock(_ptr: *mut u8, _len: usize) -> Result<(), PageError> {
    Err(PageError::Unsupported)
}

pub(crate) fn unlock(_ptr: *mut u8, _len: usize) {}

pub(crate) fn protect(_ptr: *mut u8, _len: usize) -> Result<(), PageError> {
    Err(PageError::Unsupported)
}

pub(crate) fn unprotect(_ptr: *mut u8, _len: usize) -> Result<(), PageError> {
    Err(PageError::Unsupported)
}

pub(crate) fn exclude_from_dumps(_ptr: *mut u8, _len: usize) {}

pub(crate) fn name(_ptr: *mut u8, _len: usize, _label: &CStr) {}

pub(crate) fn lockable_bytes(_requested: usize) -> usize {
    0
}
