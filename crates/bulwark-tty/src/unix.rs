// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::mem;
use std::os::fd::RawFd;

use crate::error::TerminalError;

/// Echo switched off on a terminal until dropped.
///
/// Typed characters are not shown, but the newline still is (`ECHONL`), so
/// the cursor moves on once the user presses enter.
#[derive(Debug)]
pub struct EchoSuppression {
    fd: RawFd,
    saved: libc::termios,
    restored: bool,
}

impl EchoSuppression {
    pub(crate) fn begin(fd: RawFd) -> Option<Self> {
        if unsafe { libc::isatty(fd) } != 1 {
            log::debug!("fd {fd} is not a terminal, echo left unchanged");
            return None;
        }

        let mut saved: libc::termios = unsafe { mem::zeroed() };

        if unsafe { libc::tcgetattr(fd, &mut saved) } != 0 {
            log::debug!("tcgetattr failed on fd {fd}, echo left unchanged");
            return None;
        }

        let mut silent = saved;
        silent.c_lflag &= !libc::ECHO;
        silent.c_lflag |= libc::ECHONL;

        if unsafe { libc::tcsetattr(fd, libc::TCSANOW, &silent) } != 0 {
            log::debug!("tcsetattr failed on fd {fd}, echo left unchanged");
            return None;
        }

        Some(Self {
            fd,
            saved,
            restored: false,
        })
    }

    /// Descriptor whose echo is suppressed.
    pub fn fd(&self) -> RawFd {
        self.fd
    }

    /// Returns `true` once the original mode has been put back.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Puts the terminal back in the mode it had before suppression.
    ///
    /// Safe to call more than once: later calls do nothing. On failure the
    /// next call (or the drop) tries again.
    pub fn reenable_echo(&mut self) -> Result<(), TerminalError> {
        if self.restored {
            return Ok(());
        }

        if unsafe { libc::tcsetattr(self.fd, libc::TCSANOW, &self.saved) } != 0 {
            return Err(TerminalError::Restore);
        }

        self.restored = true;

        Ok(())
    }
}

impl Drop for EchoSuppression {
    fn drop(&mut self) {
        if let Err(e) = self.reenable_echo() {
            log::debug!("{e}");
        }
    }
}
