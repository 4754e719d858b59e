// ABOUTME: Static VDOT reference table with bidirectional bracket interpolation
// ABOUTME: Maps race performances to fitness indices and fitness indices back to race times
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Fitness reference table.
//!
//! A small ordered set of reference points maps a fitness index (VDOT)
//! to equivalent race times over the four tracked distances. Both
//! lookup directions — performance to index and index to time — run the
//! same bracket search over the same immutable array. The table is
//! process-wide, read-only data; nothing mutates it after load.
//!
//! Out-of-range queries recover locally:
//! - a time faster/slower than every row clamps to the table edge
//!   extended by [`vdot::OUT_OF_RANGE_MARGIN`];
//! - an index outside the row range falls back to the middle row's time.

use crate::constants::vdot;
use crate::models::RaceDistance;
use tracing::trace;

/// One reference point: a fitness index and its equivalent race times
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TablePoint {
    /// Fitness index (VDOT-equivalent)
    pub vdot: f64,
    /// Equivalent race times in seconds, indexed by [`RaceDistance::index`]
    pub race_times: [f64; 4],
}

/// Index of the middle reference row (VDOT 50), the fallback for
/// out-of-range inverse lookups
pub const MIDDLE_POINT_INDEX: usize = 4;

/// Reference points, ordered by strictly increasing index.
///
/// Within each row the columns are 5K, 10K, half marathon, marathon
/// seconds; every column strictly decreases as the index increases
/// (faster at higher fitness). Both invariants are pinned by tests.
pub const VDOT_TABLE: [TablePoint; 9] = [
    TablePoint {
        vdot: 30.0,
        race_times: [1_860.0, 3_860.0, 8_520.0, 17_520.0],
    },
    TablePoint {
        vdot: 35.0,
        race_times: [1_650.0, 3_420.0, 7_560.0, 15_600.0],
    },
    TablePoint {
        vdot: 40.0,
        race_times: [1_485.0, 3_070.0, 6_780.0, 13_980.0],
    },
    TablePoint {
        vdot: 45.0,
        race_times: [1_345.0, 2_780.0, 6_150.0, 12_720.0],
    },
    TablePoint {
        vdot: 50.0,
        race_times: [1_225.0, 2_535.0, 5_610.0, 11_640.0],
    },
    TablePoint {
        vdot: 55.0,
        race_times: [1_130.0, 2_335.0, 5_160.0, 10_740.0],
    },
    TablePoint {
        vdot: 60.0,
        race_times: [1_045.0, 2_160.0, 4_780.0, 9_960.0],
    },
    TablePoint {
        vdot: 65.0,
        race_times: [975.0, 2_015.0, 4_455.0, 9_300.0],
    },
    TablePoint {
        vdot: 70.0,
        race_times: [915.0, 1_890.0, 4_180.0, 8_730.0],
    },
];

/// Locate the adjacent pair of rows whose values straddle `query`.
///
/// `value_at` reads a monotonic column (ascending or descending) of the
/// table. Returns the left row index and the fractional position of the
/// query inside the pair, or `None` when the query falls outside the
/// column's range.
fn bracket(value_at: impl Fn(usize) -> f64, query: f64) -> Option<(usize, f64)> {
    for i in 0..VDOT_TABLE.len() - 1 {
        let a = value_at(i);
        let b = value_at(i + 1);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if (lo..=hi).contains(&query) {
            let span = b - a;
            if span.abs() < f64::EPSILON {
                return Some((i, 0.0));
            }
            return Some((i, (query - a) / span));
        }
    }
    None
}

/// Estimate the fitness index from one race performance.
///
/// Interpolates linearly between the two reference rows whose times for
/// `distance` bracket `time_seconds`. Performances outside the table
/// clamp to the nearest edge index extended by
/// [`vdot::OUT_OF_RANGE_MARGIN`]; they never extrapolate unboundedly.
#[must_use]
pub fn estimate_fitness(distance: RaceDistance, time_seconds: f64) -> f64 {
    let column = distance.index();

    if let Some((i, fraction)) = bracket(|i| VDOT_TABLE[i].race_times[column], time_seconds) {
        let lower = VDOT_TABLE[i].vdot;
        let upper = VDOT_TABLE[i + 1].vdot;
        let estimate = fraction.mul_add(upper - lower, lower);
        trace!(
            distance = distance.label(),
            time_seconds,
            estimate,
            "fitness index interpolated"
        );
        return estimate;
    }

    // Times descend with the index, so the last row is the fastest.
    let fastest = VDOT_TABLE[VDOT_TABLE.len() - 1].race_times[column];
    let clamped = if time_seconds < fastest {
        VDOT_TABLE[VDOT_TABLE.len() - 1].vdot + vdot::OUT_OF_RANGE_MARGIN
    } else {
        VDOT_TABLE[0].vdot - vdot::OUT_OF_RANGE_MARGIN
    };
    trace!(
        distance = distance.label(),
        time_seconds,
        clamped,
        "performance outside reference table, clamped to edge"
    );
    clamped
}

/// Equivalent race time for a fitness index over a tracked distance.
///
/// Inverse of [`estimate_fitness`]: interpolates the time column between
/// the two rows whose indices bracket `fitness_index`. An out-of-range
/// index falls back to the middle reference row's time for the distance.
#[must_use]
pub fn equivalent_time(fitness_index: f64, distance: RaceDistance) -> f64 {
    let column = distance.index();

    bracket(|i| VDOT_TABLE[i].vdot, fitness_index).map_or_else(
        || {
            trace!(
                fitness_index,
                distance = distance.label(),
                "fitness index outside reference table, using middle row"
            );
            VDOT_TABLE[MIDDLE_POINT_INDEX].race_times[column]
        },
        |(i, fraction)| {
            let lower = VDOT_TABLE[i].race_times[column];
            let upper = VDOT_TABLE[i + 1].race_times[column];
            fraction.mul_add(upper - lower, lower)
        },
    )
}
