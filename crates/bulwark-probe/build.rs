// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// Build script for the sigsetjmp/siglongjmp shim

fn main() {
    println!("cargo:rerun-if-changed=src/shim/probe.c");

    // Only Unix targets have SIGILL delivery to install a handler for
    let is_unix = std::env::var("CARGO_CFG_TARGET_FAMILY")
        .map(|families| families.split(',').any(|family| family == "unix"))
        .unwrap_or(false);

    if is_unix {
        cc::Build::new()
            .file("src/shim/probe.c")
            .warnings(true)
            .compile("bulwark_probe_shim");
    }
}
