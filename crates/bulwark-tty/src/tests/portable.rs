// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{EchoSuppression, suppress_echo_on_terminal};

#[test]
fn test_no_terminal_support() {
    assert!(suppress_echo_on_terminal().is_none());
}

#[test]
fn test_inert_session_reports_neutral_values() {
    let mut session = EchoSuppression::inert();

    assert_eq!(session.fd(), -1);
    assert!(session.is_restored());
    assert_eq!(session.reenable_echo(), Ok(()));
    assert_eq!(session.reenable_echo(), Ok(()));
}
