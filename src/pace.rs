// ABOUTME: Training pace derivation from the fitness index via the Daniels velocity quadratic
// ABOUTME: Velocity/pace conversions guarded against non-positive input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Pace model.
//!
//! A single characteristic velocity — the velocity at `VO2max` — is a
//! quadratic function of the fitness index. Zone paces are fixed
//! fractions of it; repetition pace runs above it.

use crate::config::PaceMultipliers;
use crate::constants::vdot::{
    VELOCITY_COEFFICIENT_A, VELOCITY_COEFFICIENT_B, VELOCITY_COEFFICIENT_C,
};
use crate::errors::{EngineError, EngineResult};
use crate::models::TrainingPaces;

/// Characteristic velocity (velocity at `VO2max`) in km/min.
///
/// `v_m_per_min = A + B * vdot - C * vdot^2`, monotonically increasing
/// and continuous over the practical index range.
#[must_use]
pub fn characteristic_velocity(fitness_index: f64) -> f64 {
    let v_m_per_min = (VELOCITY_COEFFICIENT_C * fitness_index).mul_add(
        -fitness_index,
        fitness_index.mul_add(VELOCITY_COEFFICIENT_B, VELOCITY_COEFFICIENT_A),
    );
    v_m_per_min / 1000.0
}

/// Zone-specific training velocities for a fitness index
#[must_use]
pub fn training_paces(fitness_index: f64, multipliers: &PaceMultipliers) -> TrainingPaces {
    let velocity = characteristic_velocity(fitness_index);
    TrainingPaces {
        easy: velocity * multipliers.easy,
        tempo: velocity * multipliers.tempo,
        threshold: velocity * multipliers.threshold,
        interval: velocity * multipliers.interval,
        repetition: velocity * multipliers.repetition,
    }
}

/// Format a velocity in km/min as a per-kilometer pace string (`M:SS`)
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] for a non-positive velocity;
/// the conversion is undefined there and must not silently produce
/// nonsense.
pub fn velocity_to_pace(velocity_km_per_min: f64) -> EngineResult<String> {
    if velocity_km_per_min <= 0.0 || !velocity_km_per_min.is_finite() {
        return Err(EngineError::invalid_input(
            "velocity",
            format!("must be positive and finite, got {velocity_km_per_min}"),
        ));
    }

    let seconds_per_km = 60.0 / velocity_km_per_min;
    let mut minutes = (seconds_per_km / 60.0).floor() as u32;
    let mut seconds = (seconds_per_km % 60.0).round() as u32;
    if seconds == 60 {
        minutes += 1;
        seconds = 0;
    }

    Ok(format!("{minutes}:{seconds:02}"))
}

/// Pace band string for two velocities, slower bound printed first
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when either velocity is
/// non-positive.
pub fn pace_range(slow_velocity: f64, fast_velocity: f64) -> EngineResult<String> {
    let slow = velocity_to_pace(slow_velocity)?;
    let fast = velocity_to_pace(fast_velocity)?;
    Ok(format!("{slow}-{fast} min/km"))
}
