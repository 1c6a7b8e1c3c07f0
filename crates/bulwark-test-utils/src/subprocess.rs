// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::process::Command;

/// Re-runs the current test binary on the single `#[ignore]`d test `test_name`.
///
/// `test_name` is the full path inside the crate, e.g.
/// `tests::sys::seccomp_lock::subprocess_test_x`. Returns the exit code, or
/// `None` if the run was killed by a signal. The child's output is forwarded.
///
/// # Panics
///
/// If the binary can't be spawned, or if no test matches `test_name`: a
/// misspelled name would otherwise report a clean exit.
pub fn run_test_as_subprocess(test_name: &str) -> Option<i32> {
    let exe = std::env::current_exe().expect("Failed to current_exe()");
    let output = Command::new(exe)
        .arg(test_name)
        .args(["--exact", "--ignored", "--test-threads=1", "--nocapture"])
        .output()
        .expect("Failed to spawn test subprocess");

    let stdout = String::from_utf8_lossy(&output.stdout);
    print!("{stdout}");
    eprint!("{}", String::from_utf8_lossy(&output.stderr));

    assert!(
        !stdout.contains("running 0 tests"),
        "no test named {test_name}"
    );

    output.status.code()
}
