// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for bulwark-probe.
use thiserror::Error;

/// Reasons a probe produced no value of its own.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ProbeError {
    /// The probe raised `SIGILL`.
    #[error("probe executed an illegal instruction")]
    Faulted,

    /// `sigaction(SIGILL)` failed; the probe did not run.
    #[error("sigaction(SIGILL) failed")]
    HandlerInstall,

    /// Another probe is in flight; the probe did not run.
    #[error("another instruction probe is already running")]
    Busy,

    /// No fault isolation on this platform; the probe did not run.
    #[error("instruction probes are not supported on this platform")]
    Unsupported,
}

impl ProbeError {
    /// Integer sentinel reported by [`run_instruction_probe`](crate::run_instruction_probe).
    pub fn sentinel(self) -> i32 {
        match self {
            Self::Faulted => crate::PROBE_FAULTED,
            Self::HandlerInstall | Self::Busy => crate::PROBE_UNAVAILABLE,
            Self::Unsupported => crate::PROBE_UNSUPPORTED,
        }
    }
}
