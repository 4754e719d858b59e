// ABOUTME: Integration tests for race time parsing and formatting
// ABOUTME: Pins the accepted grammar, rejection cases, and the round-trip property
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stridecast::errors::EngineError;
use stridecast::time_codec::{format_time, format_time_f64, parse_time};

#[test]
fn test_parse_minutes_seconds() {
    assert_eq!(parse_time("12:34").unwrap(), 754);
    assert_eq!(parse_time("0:00").unwrap(), 0);
    assert_eq!(parse_time("9:05").unwrap(), 545);
    assert_eq!(parse_time("59:59").unwrap(), 3599);
}

#[test]
fn test_parse_hours_minutes_seconds() {
    assert_eq!(parse_time("1:02:03").unwrap(), 3723);
    assert_eq!(parse_time("2:59:59").unwrap(), 10799);
    assert_eq!(parse_time("10:00:00").unwrap(), 36000);
}

#[test]
fn test_parse_rejects_malformed_input() {
    let rejected = [
        "abc", "", ":", "12", "12:3", "12:345", "1:2:03", "1:02:3", "100:00", "12:34:56:78",
        "-1:00", "1:-10", "12.5:00", " 12:34", "12:34 ",
    ];
    for input in rejected {
        let result = parse_time(input);
        assert!(
            matches!(result, Err(EngineError::InvalidTimeFormat { .. })),
            "expected '{input}' to be rejected, got {result:?}"
        );
    }
}

#[test]
fn test_parse_rejects_overflowing_subunits() {
    // Seconds and non-leading minutes must stay below 60, otherwise
    // formatting could never reproduce the input.
    assert!(parse_time("1:60").is_err());
    assert!(parse_time("0:99").is_err());
    assert!(parse_time("1:60:00").is_err());
    assert!(parse_time("1:00:60").is_err());
}

#[test]
fn test_format_time() {
    assert_eq!(format_time(754), "12:34");
    assert_eq!(format_time(3723), "1:02:03");
    assert_eq!(format_time(0), "0:00");
    assert_eq!(format_time(59), "0:59");
    assert_eq!(format_time(3600), "1:00:00");
    assert_eq!(format_time(36000), "10:00:00");
}

#[test]
fn test_round_trip_on_well_formed_strings() {
    for s in ["12:34", "0:00", "59:59", "1:02:03", "2:00:00", "9:05"] {
        let seconds = parse_time(s).unwrap();
        assert_eq!(format_time(seconds), s, "round trip failed for '{s}'");
    }
}

#[test]
fn test_format_floors_fractional_seconds() {
    assert_eq!(format_time_f64(754.9), "12:34");
    assert_eq!(format_time_f64(754.0), "12:34");
    assert_eq!(format_time_f64(-5.0), "0:00");
}
