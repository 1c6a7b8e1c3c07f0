// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use serial_test::serial;

use bulwark::env::{read_env_variable, read_env_variable_sz, running_in_privileged_state};

#[test]
fn test_test_runner_is_unprivileged() {
    assert!(!running_in_privileged_state());
}

#[test]
#[serial(env)]
fn test_read_through_facade() {
    unsafe { std::env::set_var("BULWARK_FACADE_TEST", " 12 ") };

    assert_eq!(read_env_variable("BULWARK_FACADE_TEST"), Some(" 12 ".into()));
    assert_eq!(read_env_variable_sz("BULWARK_FACADE_TEST", 1), 12);

    unsafe { std::env::remove_var("BULWARK_FACADE_TEST") };

    assert_eq!(read_env_variable_sz("BULWARK_FACADE_TEST", 1), 1);
}

#[test]
fn test_mock_detector_through_facade() {
    use bulwark::env::EnvReader;
    use bulwark::support::test_utils::env::{
        MockPrivilegeDetector, MockPrivilegeDetectorBehaviour,
    };

    let reader = EnvReader::new(MockPrivilegeDetector::new(
        MockPrivilegeDetectorBehaviour::ForcePrivileged,
    ));

    assert_eq!(reader.read("PATH"), None);
}
