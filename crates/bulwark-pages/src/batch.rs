// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::page::LockedPage;

/// The pages returned by one allocation call.
///
/// A batch owns its pages and is released as a whole, either by
/// [`free_locked_pages`](crate::free_locked_pages) or by dropping it.
/// Pages can be borrowed but never moved out, so a partial release can't
/// be expressed.
#[derive(Debug, Default)]
pub struct LockedPages {
    pages: Vec<LockedPage>,
}

impl LockedPages {
    pub(crate) fn new(pages: Vec<LockedPage>) -> Self {
        Self { pages }
    }

    /// Number of pages in the batch. May be lower than requested.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if the allocation could not provide any page.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Returns the page at `index`.
    pub fn get(&self, index: usize) -> Option<&LockedPage> {
        self.pages.get(index)
    }

    /// Returns the page at `index` for writing.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut LockedPage> {
        self.pages.get_mut(index)
    }

    /// Iterates over the pages in allocation order.
    pub fn iter(&self) -> core::slice::Iter<'_, LockedPage> {
        self.pages.iter()
    }

    /// Iterates mutably over the pages in allocation order.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, LockedPage> {
        self.pages.iter_mut()
    }
}

impl<'a> IntoIterator for &'a LockedPages {
    type Item = &'a LockedPage;
    type IntoIter = core::slice::Iter<'a, LockedPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut LockedPages {
    type Item = &'a mut LockedPage;
    type IntoIter = core::slice::IterMut<'a, LockedPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
