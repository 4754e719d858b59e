// ABOUTME: Env-overridable engine configuration backed by the documented constants
// ABOUTME: Pace multipliers and progression tuning, loaded once per engine instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Engine configuration.
//!
//! Defaults come from [`crate::constants`]; every knob can be overridden
//! through a `STRIDECAST_*` environment variable. Unset or unparseable
//! variables fall back to the constant.

use crate::constants::{pace_multipliers, progression};
use crate::models::Intensity;
use serde::{Deserialize, Serialize};
use std::env;

/// Read an `f64` override from the environment, falling back to `default`
fn env_f64(key: &str, default: f64) -> f64 {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Training pace multipliers as fractions of the characteristic velocity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaceMultipliers {
    /// Easy / endurance pace multiplier
    pub easy: f64,
    /// Tempo pace multiplier
    pub tempo: f64,
    /// Lactate threshold pace multiplier
    pub threshold: f64,
    /// Interval (`VO2max`) pace multiplier
    pub interval: f64,
    /// Repetition pace multiplier (above 1.0)
    pub repetition: f64,
    /// Scale applied to easy velocity for recovery running
    pub recovery_scale: f64,
}

impl Default for PaceMultipliers {
    fn default() -> Self {
        Self {
            easy: pace_multipliers::EASY,
            tempo: pace_multipliers::TEMPO,
            threshold: pace_multipliers::THRESHOLD,
            interval: pace_multipliers::INTERVAL,
            repetition: pace_multipliers::REPETITION,
            recovery_scale: pace_multipliers::RECOVERY_SCALE,
        }
    }
}

impl PaceMultipliers {
    /// Load pace multipliers from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            easy: env_f64("STRIDECAST_PACE_EASY_MULTIPLIER", pace_multipliers::EASY),
            tempo: env_f64("STRIDECAST_PACE_TEMPO_MULTIPLIER", pace_multipliers::TEMPO),
            threshold: env_f64(
                "STRIDECAST_PACE_THRESHOLD_MULTIPLIER",
                pace_multipliers::THRESHOLD,
            ),
            interval: env_f64(
                "STRIDECAST_PACE_INTERVAL_MULTIPLIER",
                pace_multipliers::INTERVAL,
            ),
            repetition: env_f64(
                "STRIDECAST_PACE_REPETITION_MULTIPLIER",
                pace_multipliers::REPETITION,
            ),
            recovery_scale: env_f64(
                "STRIDECAST_PACE_RECOVERY_SCALE",
                pace_multipliers::RECOVERY_SCALE,
            ),
        }
    }
}

/// Progression model tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Base rate at six or more weekly sessions
    pub base_rate_six_plus: f64,
    /// Base rate at five weekly sessions
    pub base_rate_five: f64,
    /// Base rate at four weekly sessions
    pub base_rate_four: f64,
    /// Base rate at three weekly sessions
    pub base_rate_three: f64,
    /// Base rate below three weekly sessions
    pub base_rate_minimal: f64,
    /// Additive improvement per kilogram of planned weight loss
    pub weight_loss_rate_per_kg: f64,
    /// Exponential rate of the saturating time curve
    pub time_curve_rate: f64,
    /// Hard ceiling on the improvement fraction
    pub improvement_cap: f64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            base_rate_six_plus: progression::BASE_RATE_SIX_PLUS,
            base_rate_five: progression::BASE_RATE_FIVE,
            base_rate_four: progression::BASE_RATE_FOUR,
            base_rate_three: progression::BASE_RATE_THREE,
            base_rate_minimal: progression::BASE_RATE_MINIMAL,
            weight_loss_rate_per_kg: progression::WEIGHT_LOSS_RATE_PER_KG,
            time_curve_rate: progression::TIME_CURVE_RATE,
            improvement_cap: progression::IMPROVEMENT_CAP,
        }
    }
}

impl ProgressionConfig {
    /// Load progression tuning from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_rate_six_plus: env_f64(
                "STRIDECAST_PROGRESSION_BASE_SIX_PLUS",
                progression::BASE_RATE_SIX_PLUS,
            ),
            base_rate_five: env_f64(
                "STRIDECAST_PROGRESSION_BASE_FIVE",
                progression::BASE_RATE_FIVE,
            ),
            base_rate_four: env_f64(
                "STRIDECAST_PROGRESSION_BASE_FOUR",
                progression::BASE_RATE_FOUR,
            ),
            base_rate_three: env_f64(
                "STRIDECAST_PROGRESSION_BASE_THREE",
                progression::BASE_RATE_THREE,
            ),
            base_rate_minimal: env_f64(
                "STRIDECAST_PROGRESSION_BASE_MINIMAL",
                progression::BASE_RATE_MINIMAL,
            ),
            weight_loss_rate_per_kg: env_f64(
                "STRIDECAST_PROGRESSION_WEIGHT_LOSS_RATE",
                progression::WEIGHT_LOSS_RATE_PER_KG,
            ),
            time_curve_rate: env_f64(
                "STRIDECAST_PROGRESSION_TIME_CURVE_RATE",
                progression::TIME_CURVE_RATE,
            ),
            improvement_cap: env_f64(
                "STRIDECAST_PROGRESSION_CAP",
                progression::IMPROVEMENT_CAP,
            ),
        }
    }

    /// Base achievable rate for a weekly session count
    #[must_use]
    pub fn base_rate(&self, sessions_per_week: u32) -> f64 {
        match sessions_per_week {
            s if s >= 6 => self.base_rate_six_plus,
            5 => self.base_rate_five,
            4 => self.base_rate_four,
            3 => self.base_rate_three,
            _ => self.base_rate_minimal,
        }
    }

    /// Multiplier applied for the self-assessed training intensity
    #[must_use]
    pub fn intensity_factor(&self, intensity: Intensity) -> f64 {
        match intensity {
            Intensity::Easy => progression::INTENSITY_FACTOR_EASY,
            Intensity::Moderate => progression::INTENSITY_FACTOR_MODERATE,
            Intensity::Hard => progression::INTENSITY_FACTOR_HARD,
        }
    }
}

/// Aggregate engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Training pace multipliers
    pub paces: PaceMultipliers,
    /// Progression model tuning
    pub progression: ProgressionConfig,
}

impl EngineConfig {
    /// Load the full engine configuration from the environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            paces: PaceMultipliers::from_env(),
            progression: ProgressionConfig::from_env(),
        }
    }
}
