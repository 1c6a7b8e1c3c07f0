// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Hardened OS services for code that handles secrets.</em></p>
//!
//! ---
//!
//! Bulwark is the thin layer between a cryptographic library and the
//! operating system. Every query degrades gracefully: when the platform can't
//! answer, you get a neutral value, never a crash.
//!
//! # Features
//!
//! - 🔒 **Locked guarded pages** - `mlock`ed, excluded from core dumps, fenced by `PROT_NONE` guard pages, scrubbed on release
//! - 🧭 **CPU and clock queries** - hardware capability words, cycle counter, monotonic and wall clocks, page size
//! - 🧪 **Instruction probes** - run a candidate instruction, survive `SIGILL`
//! - 🛡️ **Privilege-aware config** - environment variables are ignored in setuid/setgid processes
//! - 🙈 **Echo suppression** - password prompts without echo, restored on every exit path
//!
//! # Quick Start
//!
//! ```rust
//! use bulwark::pages::{allocate_locked_pages, free_locked_pages, page_allow_access, page_prohibit_access};
//!
//! let mut pages = allocate_locked_pages(1);
//!
//! if let Some(page) = pages.get_mut(0) {
//!     unsafe { page.as_mut_slice()[..4].copy_from_slice(b"key!") };
//!
//!     page_prohibit_access(page).expect("Failed to page_prohibit_access(..)");
//!     // Any access now faults
//!     page_allow_access(page).expect("Failed to page_allow_access(..)");
//! }
//!
//! free_locked_pages(pages);
//! ```
//!
//! ```rust
//! use bulwark::cpu::{high_resolution_clock, page_size};
//! use bulwark::env::read_env_variable_sz;
//!
//! let pool_kib = read_env_variable_sz("MY_POOL_KIB", 64);
//! let pool_pages = pool_kib * 1024 / page_size();
//!
//! let t0 = high_resolution_clock();
//! // ... timed work ...
//! let elapsed = high_resolution_clock().wrapping_sub(t0);
//! # let _ = (pool_pages, elapsed);
//! ```
//!
//! # Crates
//!
//! | Module | Crate | Purpose |
//! |--------|-------|---------|
//! | [`cpu`] | `bulwark-cpu` | process id, CPU capabilities, clocks, page size, time formatting |
//! | [`pages`] | `bulwark-pages` | locked pages with guard pages, memory locking limit |
//! | [`probe`] | `bulwark-probe` | `SIGILL`-safe instruction probes |
//! | [`env`] | `bulwark-env` | privilege detection and environment reads |
//! | [`tty`] | `bulwark-tty` | scoped terminal echo suppression |
//! | [`util`] | `bulwark-util` | scrubbing and verification helpers |
//!
//! # Configuration
//!
//! `BULWARK_MLOCK_POOL_SIZE` sets the locked pool budget in KiB (default and
//! maximum 512, `0` disables locking). It is read through [`env`], so it has
//! no effect in privileged processes.
//!
//! # Logging
//!
//! Degraded outcomes are reported through the [`log`](https://docs.rs/log)
//! facade at `debug` level, per-syscall failures at `trace`. Install any
//! logger to see them.
//!
//! # Platform support
//!
//! | Platform | Locked pages | Probes | Privilege check | Echo suppression |
//! |----------|--------------|--------|-----------------|------------------|
//! | Linux | Full (`mlock`, `MADV_DONTDUMP`, guard pages, VMA names) | Yes | `AT_SECURE` | Yes |
//! | macOS | `mlock`, guard pages | Yes | `issetugid` | Yes |
//! | FreeBSD | `mlock`, `MAP_NOCORE`, guard pages | Yes | `issetugid` | Yes |
//! | Other | None (empty batches) | Unsupported | Never privileged | None |
//!
//! # License
//!
//! GPL-3.0-only

#![warn(missing_docs)]

pub mod support;

pub use bulwark_cpu as cpu;
pub use bulwark_env as env;
pub use bulwark_pages as pages;
pub use bulwark_probe as probe;
pub use bulwark_tty as tty;
pub use bulwark_util as util;
