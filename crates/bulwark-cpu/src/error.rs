// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-cpu.
use thiserror::Error;

/// Errors from wall-clock queries.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ClockError {
    /// This build or platform has no real-time clock.
    #[error("real-time clock not implemented")]
    NotImplemented,

    /// The real-time clock could not be read.
    #[error("clock_gettime(CLOCK_REALTIME) failed")]
    Unavailable,

    /// The real-time clock reports a time before the Unix epoch.
    #[error("system time is before the Unix epoch")]
    BeforeEpoch,

    /// The timestamp cannot be represented as local time.
    #[error("localtime_r failed")]
    InvalidTime,

    /// The format string is unusable or its expansion is too long.
    #[error("strftime failed")]
    InvalidFormat,
}
