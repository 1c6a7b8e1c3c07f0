// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use bulwark_env::{EnvReader, PrivilegeDetector, SystemPrivilegeDetector};

use crate::sys;

/// Environment variable holding the locked pool size in KiB. `0` disables locking.
pub const MLOCK_POOL_SIZE_ENV: &str = "BULWARK_MLOCK_POOL_SIZE";

/// Default, and maximum, locked pool size in KiB.
pub const MAX_MLOCK_POOL_KIB: usize = 512;

/// Maximum number of bytes that locked pools should use.
///
/// Reads [`MLOCK_POOL_SIZE_ENV`] (KiB, capped at [`MAX_MLOCK_POOL_KIB`])
/// through the privilege-aware reader, then bounds it by `RLIMIT_MEMLOCK`.
/// Returns `0` when locking is disabled or unsupported.
pub fn memory_locking_limit() -> usize {
    memory_locking_limit_with(&EnvReader::<SystemPrivilegeDetector>::default())
}

pub(crate) fn memory_locking_limit_with<P: PrivilegeDetector>(reader: &EnvReader<P>) -> usize {
    let requested_kib = reader
        .read_sz(MLOCK_POOL_SIZE_ENV, MAX_MLOCK_POOL_KIB)
        .min(MAX_MLOCK_POOL_KIB);

    if requested_kib == 0 {
        return 0;
    }

    sys::lockable_bytes(requested_kib * 1024)
}
