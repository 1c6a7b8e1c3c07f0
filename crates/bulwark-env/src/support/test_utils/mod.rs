// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for mocking the privilege check.

mod mock_privilege_detector;

pub use mock_privilege_detector::{MockPrivilegeDetector, MockPrivilegeDetectorBehaviour};
