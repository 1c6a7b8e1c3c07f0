// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bulwark::cpu::{
    ClockError, available_cpus, format_time, high_resolution_clock, page_size, process_id,
    system_timestamp_ns,
};

// 2020-01-01T00:00:00Z
const JAN_2020_NS: u64 = 1_577_836_800 * 1_000_000_000;

#[test]
fn test_process_id_matches_std() {
    assert_eq!(process_id(), std::process::id());
}

#[test]
fn test_available_cpus_at_least_one() {
    assert!(available_cpus() >= 1);
}

#[test]
fn test_page_size_is_power_of_two() {
    assert!(page_size() >= 1);
    assert!(page_size().is_power_of_two());
}

#[test]
fn test_high_resolution_clock_advances() {
    let first = high_resolution_clock();
    std::thread::sleep(std::time::Duration::from_millis(2));
    let second = high_resolution_clock();

    assert_ne!(first, 0);
    assert_ne!(first, second);
}

#[test]
fn test_system_timestamp_after_2020() {
    match system_timestamp_ns() {
        Ok(ns) => assert!(ns > JAN_2020_NS),
        Err(e) => assert_eq!(e, ClockError::NotImplemented),
    }
}

#[cfg(unix)]
#[test]
fn test_format_time_epoch_year() {
    let year = format_time(0, "%Y").expect("Failed to format_time(..)");

    assert!(year == "1970" || year == "1969", "unexpected year {year}");
}
