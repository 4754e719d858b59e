// ABOUTME: Five Karvonen heart-rate training zones with per-zone target paces
// ABOUTME: Boundaries from heart rate reserve fractions; zone 5 ceiling pinned to max HR
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Heart-rate zone model.
//!
//! Zone boundaries follow the Karvonen method: `resting + reserve *
//! fraction`, rounded to whole bpm, over fixed reserve fractions
//! covering 50%-100%. Bands are contiguous; the reported ceiling of
//! zone 5 is the profile's max heart rate itself, not a reserve-derived
//! value, so the band always reaches the ceiling.

use crate::config::PaceMultipliers;
use crate::constants::hr_zones::RESERVE_FRACTIONS;
use crate::errors::EngineResult;
use crate::models::{HeartRateProfile, TrainingZone};
use crate::pace::{training_paces, velocity_to_pace};

/// Zone display names, lightest first
const ZONE_NAMES: [&str; 5] = [
    "Zone 1 - Recovery",
    "Zone 2 - Endurance",
    "Zone 3 - Tempo",
    "Zone 4 - Threshold",
    "Zone 5 - VO2max",
];

/// What each zone develops
const ZONE_PURPOSES: [&str; 5] = [
    "Active recovery, very easy jogging",
    "Aerobic base building, the bulk of weekly training",
    "Marathon pace and tempo runs",
    "Lactate threshold, half marathon effort",
    "Interval work, maximal aerobic speed",
];

/// Round a Karvonen boundary to whole bpm
fn boundary(profile: HeartRateProfile, fraction: f64) -> u16 {
    let raw = f64::from(profile.resting_hr) + f64::from(profile.reserve()) * fraction;
    raw.round() as u16
}

/// Compute the five training zones for a heart rate profile.
///
/// Each zone's target pace is drawn from the pace model for
/// `fitness_index`: recovery-scaled easy, easy, tempo, threshold, and
/// interval velocities for zones 1 through 5.
///
/// # Errors
///
/// Returns [`crate::errors::EngineError::InvalidHeartRateProfile`] when
/// the profile's reserve is not positive (checked at profile
/// construction; re-validated here for callers that build the struct
/// directly), and [`crate::errors::EngineError::InvalidInput`] if a
/// configured multiplier drives a zone velocity non-positive.
pub fn compute_zones(
    profile: HeartRateProfile,
    fitness_index: f64,
    multipliers: &PaceMultipliers,
) -> EngineResult<Vec<TrainingZone>> {
    // Callers may construct HeartRateProfile literally; keep the reserve
    // invariant enforced at the single place that depends on it.
    let profile = HeartRateProfile::new(profile.max_hr, profile.resting_hr)?;

    let paces = training_paces(fitness_index, multipliers);
    let zone_velocities = [
        paces.easy * multipliers.recovery_scale,
        paces.easy,
        paces.tempo,
        paces.threshold,
        paces.interval,
    ];

    let mut zones = Vec::with_capacity(5);
    for (i, (name, purpose)) in ZONE_NAMES.iter().zip(ZONE_PURPOSES).enumerate() {
        let lower_fraction = RESERVE_FRACTIONS[i];
        let upper_fraction = RESERVE_FRACTIONS[i + 1];
        let ordinal = (i + 1) as u8;

        let max_hr = if ordinal == 5 {
            profile.max_hr
        } else {
            boundary(profile, upper_fraction)
        };

        zones.push(TrainingZone {
            name: (*name).to_owned(),
            ordinal,
            min_hr: boundary(profile, lower_fraction),
            max_hr,
            percentage: format!(
                "{:.0}-{:.0}%",
                lower_fraction * 100.0,
                upper_fraction * 100.0
            ),
            purpose: purpose.to_owned(),
            target_pace: velocity_to_pace(zone_velocities[i])?,
        });
    }

    Ok(zones)
}
