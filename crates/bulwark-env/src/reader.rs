// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! EnvReader - environment access gated by a privilege check.

use crate::system::SystemPrivilegeDetector;
use crate::traits::PrivilegeDetector;

/// Reads environment variables unless the detector reports a privileged process.
///
/// Refusal looks exactly like an unset variable, so callers only ever handle
/// the "unset" path.
#[derive(Debug, Default, Clone)]
pub struct EnvReader<P: PrivilegeDetector = SystemPrivilegeDetector> {
    detector: P,
}

impl<P: PrivilegeDetector> EnvReader<P> {
    /// Creates a reader using `detector` to decide when to refuse.
    pub fn new(detector: P) -> Self {
        Self { detector }
    }

    /// Returns the detector.
    pub fn detector(&self) -> &P {
        &self.detector
    }

    /// Returns the variable's value, or `None` if it is unset, not valid
    /// Unicode, or the process is privileged.
    pub fn read(&self, name: &str) -> Option<String> {
        self.read_with(&|name| std::env::var_os(name), name)
    }

    /// Returns the variable parsed as an unsigned decimal integer.
    ///
    /// Falls back to `default` when [`read`](Self::read) yields nothing or the
    /// value (ignoring surrounding whitespace) is not a non-negative integer
    /// that fits in `usize`.
    pub fn read_sz(&self, name: &str, default: usize) -> usize {
        self.read(name)
            .and_then(|value| parse_sz(&value))
            .unwrap_or(default)
    }

    pub(crate) fn read_with(
        &self,
        lookup: &dyn Fn(&str) -> Option<std::ffi::OsString>,
        name: &str,
    ) -> Option<String> {
        // Don't even look: the environment belongs to an untrusted caller
        if self.detector.is_privileged() {
            log::debug!("privileged process, ignoring environment variable {name}");
            return None;
        }

        if name.is_empty() || name.contains(['=', '\0']) {
            return None;
        }

        lookup(name)?.into_string().ok()
    }
}

pub(crate) fn parse_sz(value: &str) -> Option<usize> {
    let digits = value.trim();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<usize>().ok()
}
