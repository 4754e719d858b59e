// ABOUTME: Race time parsing and formatting between human strings and seconds
// ABOUTME: Accepts MM:SS and HH:MM:SS; formatting is the left-inverse of parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Time codec.
//!
//! `parse_time` accepts `MM:SS` (1-2 digit minutes, exactly 2-digit
//! seconds) or `HH:MM:SS` (1-2 digit hours, exactly 2-digit minutes,
//! exactly 2-digit seconds). Minutes and seconds fields must stay below
//! 60 in positions where a larger unit precedes them; otherwise
//! `format_time(parse_time(s))` could not reproduce `s`.

use crate::errors::{EngineError, EngineResult};

/// Parse a digits-only field with the given length bounds
fn parse_field(raw: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if raw.len() < min_len || raw.len() > max_len {
        return None;
    }
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Parse a race time string to whole seconds
///
/// # Errors
///
/// Returns [`EngineError::InvalidTimeFormat`] for anything that does not
/// match the accepted grammar. Malformed input is never coerced to zero.
///
/// # Example
///
/// ```
/// use stridecast::time_codec::parse_time;
///
/// assert_eq!(parse_time("12:34"), Ok(754));
/// assert_eq!(parse_time("1:02:03"), Ok(3723));
/// assert!(parse_time("abc").is_err());
/// ```
pub fn parse_time(input: &str) -> EngineResult<u32> {
    let reject = || EngineError::invalid_time_format(input);

    let parts: Vec<&str> = input.split(':').collect();
    match parts.as_slice() {
        [minutes, seconds] => {
            let minutes = parse_field(minutes, 1, 2).ok_or_else(reject)?;
            let seconds = parse_field(seconds, 2, 2).filter(|s| *s < 60).ok_or_else(reject)?;
            Ok(minutes * 60 + seconds)
        }
        [hours, minutes, seconds] => {
            let hours = parse_field(hours, 1, 2).ok_or_else(reject)?;
            let minutes = parse_field(minutes, 2, 2).filter(|m| *m < 60).ok_or_else(reject)?;
            let seconds = parse_field(seconds, 2, 2).filter(|s| *s < 60).ok_or_else(reject)?;
            Ok(hours * 3600 + minutes * 60 + seconds)
        }
        _ => Err(reject()),
    }
}

/// Format whole seconds as `H:MM:SS` when hours are present, else `M:SS`
///
/// Left-inverse of [`parse_time`] for every string this function emits.
///
/// # Example
///
/// ```
/// use stridecast::time_codec::format_time;
///
/// assert_eq!(format_time(754), "12:34");
/// assert_eq!(format_time(3723), "1:02:03");
/// ```
#[must_use]
pub fn format_time(total_seconds: u32) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{hours}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes}:{secs:02}")
    }
}

/// Format fractional seconds, flooring to whole seconds first
///
/// Used for interpolated table times. Negative values floor to zero.
#[must_use]
pub fn format_time_f64(seconds: f64) -> String {
    format_time(seconds.max(0.0).floor() as u32)
}
