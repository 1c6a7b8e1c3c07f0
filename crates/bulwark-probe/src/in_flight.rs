// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::error::ProbeError;

const STATE_IDLE: u8 = 0;
const STATE_RUNNING: u8 = 1;

static PROBE_STATE: AtomicU8 = AtomicU8::new(STATE_IDLE);

/// Marks a probe as running until dropped.
///
/// The SIGILL disposition and the jump buffer are process-global, so at most
/// one marker exists at a time.
#[derive(Debug)]
pub(crate) struct InFlight {
    _private: (),
}

impl InFlight {
    pub(crate) fn acquire() -> Result<Self, ProbeError> {
        PROBE_STATE
            .compare_exchange(STATE_IDLE, STATE_RUNNING, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| Self { _private: () })
            .map_err(|_| ProbeError::Busy)
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        PROBE_STATE.store(STATE_IDLE, Ordering::Release);
    }
}

#[cfg(test)]
pub(crate) fn is_idle() -> bool {
    PROBE_STATE.load(Ordering::Acquire) == STATE_IDLE
}
