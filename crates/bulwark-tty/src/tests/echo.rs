// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for echo suppression on pipes and pseudo-terminals.

use std::os::fd::RawFd;

use serial_test::serial;

use crate::{TerminalError, suppress_echo_on};

struct Pipe {
    read: RawFd,
    write: RawFd,
}

impl Pipe {
    fn new() -> Self {
        let mut fds = [0 as libc::c_int; 2];
        let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
        assert_eq!(rc, 0, "Failed to pipe(..)");

        Self {
            read: fds[0],
            write: fds[1],
        }
    }
}

impl Drop for Pipe {
    fn drop(&mut self) {
        unsafe {
            libc::close(self.read);
            libc::close(self.write);
        }
    }
}

// =============================================================================
// non-terminals
// =============================================================================

#[test]
fn test_pipe_is_not_a_terminal() {
    let pipe = Pipe::new();

    assert!(suppress_echo_on(pipe.read).is_none());
    assert!(suppress_echo_on(pipe.write).is_none());
}

#[test]
fn test_invalid_fd_is_not_a_terminal() {
    assert!(suppress_echo_on(-1).is_none());
}

#[test]
fn test_terminal_error_display() {
    assert_eq!(
        TerminalError::Restore.to_string(),
        "tcsetattr(TCSANOW) failed while restoring echo"
    );
}

// =============================================================================
// pseudo-terminals
// =============================================================================

#[cfg(target_os = "linux")]
mod pty {
    use core::mem;
    use core::ptr;

    use super::*;

    struct Pty {
        master: RawFd,
        slave: RawFd,
    }

    impl Pty {
        fn open() -> Option<Self> {
            let mut master: libc::c_int = -1;
            let mut slave: libc::c_int = -1;

            let rc = unsafe {
                libc::openpty(
                    &mut master,
                    &mut slave,
                    ptr::null_mut(),
                    ptr::null(),
                    ptr::null(),
                )
            };

            // No /dev/ptmx in some sandboxes
            (rc == 0).then_some(Self { master, slave })
        }

        fn lflag(&self) -> libc::tcflag_t {
            let mut mode: libc::termios = unsafe { mem::zeroed() };
            let rc = unsafe { libc::tcgetattr(self.slave, &mut mode) };
            assert_eq!(rc, 0, "Failed to tcgetattr(..)");

            mode.c_lflag
        }
    }

    impl Drop for Pty {
        fn drop(&mut self) {
            unsafe {
                libc::close(self.slave);
                libc::close(self.master);
            }
        }
    }

    #[test]
    #[serial(tty)]
    fn test_suppression_clears_echo_and_sets_echonl() {
        let Some(pty) = Pty::open() else {
            return;
        };
        let original = pty.lflag();

        let session = suppress_echo_on(pty.slave).expect("Failed to suppress_echo_on(..)");
        let silent = pty.lflag();

        assert_eq!(silent & libc::ECHO, 0);
        assert_ne!(silent & libc::ECHONL, 0);
        assert_eq!(session.fd(), pty.slave);
        assert!(!session.is_restored());

        drop(session);

        assert_eq!(pty.lflag(), original);
    }

    #[test]
    #[serial(tty)]
    fn test_reenable_echo_restores_mode() {
        let Some(pty) = Pty::open() else {
            return;
        };
        let original = pty.lflag();

        let mut session = suppress_echo_on(pty.slave).expect("Failed to suppress_echo_on(..)");
        session.reenable_echo().expect("Failed to reenable_echo()");

        assert!(session.is_restored());
        assert_eq!(pty.lflag(), original);
    }

    #[test]
    #[serial(tty)]
    fn test_reenable_echo_is_idempotent() {
        let Some(pty) = Pty::open() else {
            return;
        };

        let mut session = suppress_echo_on(pty.slave).expect("Failed to suppress_echo_on(..)");

        session.reenable_echo().expect("Failed to reenable_echo()");
        session.reenable_echo().expect("Failed to reenable_echo()");
    }

    #[test]
    #[serial(tty)]
    fn test_drop_after_reenable_keeps_mode() {
        let Some(pty) = Pty::open() else {
            return;
        };
        let original = pty.lflag();

        let mut session = suppress_echo_on(pty.slave).expect("Failed to suppress_echo_on(..)");
        session.reenable_echo().expect("Failed to reenable_echo()");

        // Mode changed by someone else after restore must survive the drop
        let mut mode: libc::termios = unsafe { mem::zeroed() };
        unsafe { libc::tcgetattr(pty.slave, &mut mode) };
        mode.c_lflag &= !libc::ICANON;
        unsafe { libc::tcsetattr(pty.slave, libc::TCSANOW, &mode) };

        drop(session);

        assert_eq!(pty.lflag(), original & !libc::ICANON);
    }

    #[test]
    #[serial(tty)]
    fn test_reenable_fails_on_closed_fd() {
        let Some(pty) = Pty::open() else {
            return;
        };

        let fd = unsafe { libc::dup(pty.slave) };
        assert!(fd >= 0, "Failed to dup(..)");

        let mut session = suppress_echo_on(fd).expect("Failed to suppress_echo_on(..)");
        unsafe { libc::close(fd) };

        assert_eq!(session.reenable_echo(), Err(TerminalError::Restore));
        assert!(!session.is_restored());

        // Drop retries, fails again and swallows the error
        drop(session);
    }
}
