// ABOUTME: Physiological constants for fitness estimation, pacing, and progression modeling
// ABOUTME: All engine tuning values defined once as documented data, never re-derived per call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Physiological constants used throughout the prediction engine.
//!
//! Values follow established running-formula conventions. Each constant is
//! defined here exactly once; modules read them through their config types
//! or directly, and nothing recomputes them per call.

/// VDOT velocity model coefficients
///
/// References:
/// - Daniels, J. (2013). "Daniels' Running Formula" (3rd ed.). Human Kinetics.
pub mod vdot {
    /// VDOT velocity constant A (m/min)
    pub const VELOCITY_COEFFICIENT_A: f64 = 29.54;
    /// VDOT velocity coefficient B
    pub const VELOCITY_COEFFICIENT_B: f64 = 5.000_663;
    /// VDOT velocity coefficient C (quadratic term, subtracted)
    pub const VELOCITY_COEFFICIENT_C: f64 = 0.007_546;

    /// Margin applied beyond the reference table edges when a query time is
    /// faster or slower than every table row. Performances outside the table
    /// clamp to `edge index ± margin` rather than extrapolating.
    pub const OUT_OF_RANGE_MARGIN: f64 = 2.0;
}

/// Training pace multipliers as fractions of the characteristic velocity
///
/// The repetition multiplier exceeds 1.0: short fast repeats are run above
/// the velocity at `VO2max`.
pub mod pace_multipliers {
    /// Easy / endurance pace
    pub const EASY: f64 = 0.65;
    /// Tempo pace (sustained comfortably-hard running)
    pub const TEMPO: f64 = 0.80;
    /// Lactate threshold pace
    pub const THRESHOLD: f64 = 0.88;
    /// Interval (`VO2max`) pace
    pub const INTERVAL: f64 = 0.95;
    /// Repetition pace for short fast repeats
    pub const REPETITION: f64 = 1.02;
    /// Recovery running sits slightly below easy velocity
    pub const RECOVERY_SCALE: f64 = 0.90;
}

/// Heart rate zone boundaries (Karvonen method)
///
/// References:
/// - Karvonen, M.J., Kentala, E., & Mustala, O. (1957). "The effects of training on heart rate."
/// - American College of Sports Medicine (ACSM) Guidelines for Exercise Testing and Prescription, 11th Edition
pub mod hr_zones {
    /// Fractions of heart rate reserve delimiting the five zones.
    /// Zone N spans `[RESERVE_FRACTIONS[N-1], RESERVE_FRACTIONS[N])`.
    pub const RESERVE_FRACTIONS: [f64; 6] = [0.50, 0.60, 0.70, 0.80, 0.90, 1.00];
}

/// Improvement progression rates and bounds
///
/// References:
/// - Hopkins, W.G. (2004). "How to interpret changes in an athletic performance test."
/// - Midgley, A.W., McNaughton, L.R., & Jones, A.M. (2007). "Training to enhance the
///   physiological determinants of long-distance running performance."
pub mod progression {
    /// Achievable base rate at six or more weekly sessions
    pub const BASE_RATE_SIX_PLUS: f64 = 0.12;
    /// Achievable base rate at five weekly sessions
    pub const BASE_RATE_FIVE: f64 = 0.10;
    /// Achievable base rate at four weekly sessions
    pub const BASE_RATE_FOUR: f64 = 0.08;
    /// Achievable base rate at three weekly sessions
    pub const BASE_RATE_THREE: f64 = 0.06;
    /// Achievable base rate below three weekly sessions
    pub const BASE_RATE_MINIMAL: f64 = 0.04;

    /// Intensity factor for easy training
    pub const INTENSITY_FACTOR_EASY: f64 = 0.8;
    /// Intensity factor for moderate training
    pub const INTENSITY_FACTOR_MODERATE: f64 = 1.0;
    /// Intensity factor for hard training
    pub const INTENSITY_FACTOR_HARD: f64 = 1.2;

    /// Additive improvement per kilogram of planned weight loss.
    /// Weight gain contributes zero; it never reduces the fraction below
    /// the training-only baseline.
    pub const WEIGHT_LOSS_RATE_PER_KG: f64 = 0.005;

    /// Exponential rate of the saturating time curve `1 - exp(-rate * months)`.
    /// Improvement flattens past roughly four to six months and the curve
    /// approaches but never reaches 1.
    pub const TIME_CURVE_RATE: f64 = 0.55;

    /// Hard ceiling on the improvement fraction regardless of inputs.
    /// Policy invariant, not a numerical coincidence.
    pub const IMPROVEMENT_CAP: f64 = 0.15;
}

/// Weekly session derivation and workout unlock thresholds
pub mod sessions {
    /// Kilometers of weekly volume assumed per training session
    pub const KM_PER_SESSION: f64 = 8.0;
    /// Floor on derived weekly sessions
    pub const MIN_WEEKLY_SESSIONS: u32 = 2;
    /// Ceiling on derived weekly sessions
    pub const MAX_WEEKLY_SESSIONS: u32 = 7;

    /// Sessions required to unlock tempo work
    pub const TEMPO_UNLOCK: u32 = 3;
    /// Sessions required to unlock threshold intervals
    pub const THRESHOLD_UNLOCK: u32 = 4;
    /// Sessions required to unlock `VO2max` intervals
    pub const VO2MAX_UNLOCK: u32 = 5;
    /// Sessions required to unlock long intervals
    pub const LONG_INTERVAL_UNLOCK: u32 = 6;
}
