// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{ClockError, format_time};

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn test_format_epoch_year() {
        let year = format_time(0, "%Y").expect("Failed to format_time(..)");

        // Local time zone may put the epoch on Dec 31st 1969
        assert!(year == "1970" || year == "1969", "unexpected year {year}");
    }

    #[test]
    fn test_format_literal_text_passes_through() {
        let text = format_time(1_000_000_000, "at %%").expect("Failed to format_time(..)");

        assert_eq!(text, "at %");
    }

    #[test]
    fn test_format_empty_format_is_empty() {
        assert_eq!(format_time(0, ""), Ok(String::new()));
    }

    #[test]
    fn test_format_rejects_interior_nul() {
        assert_eq!(format_time(0, "%Y\0%m"), Err(ClockError::InvalidFormat));
    }

    #[test]
    fn test_format_rejects_oversized_expansion() {
        let format = "%Y".repeat(2048);

        assert_eq!(format_time(0, &format), Err(ClockError::InvalidFormat));
    }

    #[test]
    fn test_format_grows_buffer_for_long_output() {
        let format = "x".repeat(300);
        let text = format_time(0, &format).expect("Failed to format_time(..)");

        assert_eq!(text, format);
    }

    #[test]
    fn test_format_output_at_size_limit() {
        let format = "x".repeat(4096);
        let text = format_time(0, &format).expect("Failed to format_time(..)");

        assert_eq!(text.len(), 4096);
    }

    #[test]
    fn test_format_keeps_trailing_text() {
        let text = format_time(86_400 * 500, "%Y |").expect("Failed to format_time(..)");

        assert_eq!(text, "1971 |");
    }

    #[test]
    fn test_format_whitespace_only_output() {
        let text = format_time(0, " ").expect("Failed to format_time(..)");

        assert_eq!(text, " ");
    }
}

#[cfg(not(unix))]
#[test]
fn test_format_time_not_implemented() {
    assert_eq!(format_time(0, "%Y"), Err(ClockError::NotImplemented));
}
