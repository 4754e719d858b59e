// ABOUTME: Integration tests for the VDOT reference table and its two lookup directions
// ABOUTME: Pins table invariants, interpolation, clamped fallbacks, and the round-trip property
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stridecast::models::RaceDistance;
use stridecast::vdot_table::{equivalent_time, estimate_fitness, MIDDLE_POINT_INDEX, VDOT_TABLE};

#[test]
fn test_table_indices_strictly_increase() {
    for pair in VDOT_TABLE.windows(2) {
        assert!(
            pair[0].vdot < pair[1].vdot,
            "indices must strictly increase: {} then {}",
            pair[0].vdot,
            pair[1].vdot
        );
    }
}

#[test]
fn test_table_times_strictly_decrease_per_distance() {
    for distance in RaceDistance::ALL {
        let column = distance.index();
        for pair in VDOT_TABLE.windows(2) {
            assert!(
                pair[0].race_times[column] > pair[1].race_times[column],
                "{} times must strictly decrease as the index increases",
                distance.label()
            );
        }
    }
}

#[test]
fn test_estimate_fitness_for_a_20_30_five_k() {
    // 20:30 for 5K sits just under the VDOT 50 reference row.
    let vdot = estimate_fitness(RaceDistance::FiveK, 1230.0);
    assert!(vdot > 49.0, "got {vdot}");
    assert!(vdot < 51.0, "got {vdot}");
}

#[test]
fn test_estimate_fitness_at_reference_rows() {
    let vdot = estimate_fitness(RaceDistance::FiveK, 1225.0);
    assert!((vdot - 50.0).abs() < 1e-9, "got {vdot}");

    let vdot = estimate_fitness(RaceDistance::Marathon, 17_520.0);
    assert!((vdot - 30.0).abs() < 1e-9, "got {vdot}");
}

#[test]
fn test_estimate_fitness_clamps_above_the_table() {
    // Faster than the fastest row: edge index plus the fixed margin.
    let vdot = estimate_fitness(RaceDistance::FiveK, 600.0);
    assert!((vdot - 72.0).abs() < f64::EPSILON, "got {vdot}");
}

#[test]
fn test_estimate_fitness_clamps_below_the_table() {
    // Slower than the slowest row: edge index minus the fixed margin.
    let vdot = estimate_fitness(RaceDistance::FiveK, 4_000.0);
    assert!((vdot - 28.0).abs() < f64::EPSILON, "got {vdot}");
}

#[test]
fn test_equivalent_time_interpolates_between_rows() {
    // Halfway between VDOT 45 and 50 for the 10K column.
    let time = equivalent_time(47.5, RaceDistance::TenK);
    let expected = f64::midpoint(2_780.0, 2_535.0);
    assert!((time - expected).abs() < 1e-9, "got {time}");
}

#[test]
fn test_equivalent_time_out_of_range_uses_middle_row() {
    let middle = &VDOT_TABLE[MIDDLE_POINT_INDEX];
    for distance in RaceDistance::ALL {
        let too_high = equivalent_time(95.0, distance);
        let too_low = equivalent_time(10.0, distance);
        let fallback = middle.race_times[distance.index()];
        assert!((too_high - fallback).abs() < f64::EPSILON);
        assert!((too_low - fallback).abs() < f64::EPSILON);
    }
}

#[test]
fn test_forward_and_inverse_lookups_agree() {
    // estimate -> equivalent -> estimate must reproduce the index within
    // interpolation error for in-range performances.
    let cases = [
        (RaceDistance::FiveK, 1_230.0),
        (RaceDistance::FiveK, 1_500.0),
        (RaceDistance::TenK, 2_600.0),
        (RaceDistance::HalfMarathon, 6_000.0),
        (RaceDistance::Marathon, 12_000.0),
    ];
    for (distance, time) in cases {
        let vdot = estimate_fitness(distance, time);
        let reconstructed = equivalent_time(vdot, distance);
        let vdot_again = estimate_fitness(distance, reconstructed);
        assert!(
            (vdot - vdot_again).abs() < 1e-6,
            "{} at {time}s: {vdot} vs {vdot_again}",
            distance.label()
        );
        assert!(
            (time - reconstructed).abs() < 1e-6,
            "{} time did not survive the round trip: {time} vs {reconstructed}",
            distance.label()
        );
    }
}
