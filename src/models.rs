// ABOUTME: Value objects for the prediction engine: inputs, paces, zones, and report rows
// ABOUTME: All types are per-request immutable data with only primitive/string fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Core data model.
//!
//! Every type here is a per-request value object: constructed once,
//! never mutated, safe to serialize directly. The only shared state in
//! the crate is the static reference table in [`crate::vdot_table`].

use crate::errors::{EngineError, EngineResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Tolerance for matching a raw kilometer value against a tracked distance
const DISTANCE_MATCH_TOLERANCE_KM: f64 = 0.05;

/// The four tracked race distances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RaceDistance {
    /// 5 km road race
    FiveK,
    /// 10 km road race
    TenK,
    /// Half marathon (21.1 km)
    HalfMarathon,
    /// Marathon (42.2 km)
    Marathon,
}

impl RaceDistance {
    /// All tracked distances, shortest first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::HalfMarathon, Self::Marathon];

    /// Distance in kilometers
    #[must_use]
    pub const fn km(self) -> f64 {
        match self {
            Self::FiveK => 5.0,
            Self::TenK => 10.0,
            Self::HalfMarathon => 21.1,
            Self::Marathon => 42.2,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FiveK => "5K",
            Self::TenK => "10K",
            Self::HalfMarathon => "Half Marathon",
            Self::Marathon => "Marathon",
        }
    }

    /// Stable column index into the reference table rows
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::FiveK => 0,
            Self::TenK => 1,
            Self::HalfMarathon => 2,
            Self::Marathon => 3,
        }
    }

    /// Resolve a raw kilometer value to a tracked distance
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedDistance`] when the value is not
    /// one of 5, 10, 21.1, or 42.2 km.
    pub fn from_km(distance_km: f64) -> EngineResult<Self> {
        Self::ALL
            .into_iter()
            .find(|d| (d.km() - distance_km).abs() < DISTANCE_MATCH_TOLERANCE_KM)
            .ok_or(EngineError::UnsupportedDistance { distance_km })
    }
}

/// One self-reported race performance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    /// Race distance
    pub distance: RaceDistance,
    /// Finish time in whole seconds
    pub time_seconds: u32,
}

impl RaceResult {
    /// Create a race result, rejecting a zero finish time
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when `time_seconds` is zero.
    pub fn new(distance: RaceDistance, time_seconds: u32) -> EngineResult<Self> {
        if time_seconds == 0 {
            return Err(EngineError::invalid_input(
                "time_seconds",
                "race time must be positive",
            ));
        }
        Ok(Self {
            distance,
            time_seconds,
        })
    }
}

/// Heart rate profile, the source of truth for zone boundaries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeartRateProfile {
    /// Maximum heart rate (bpm)
    pub max_hr: u16,
    /// Resting heart rate (bpm)
    pub resting_hr: u16,
}

impl HeartRateProfile {
    /// Create a profile, rejecting a non-positive heart rate reserve
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidHeartRateProfile`] when `max_hr` does
    /// not exceed `resting_hr`, or either value is zero.
    pub fn new(max_hr: u16, resting_hr: u16) -> EngineResult<Self> {
        if max_hr <= resting_hr || resting_hr == 0 {
            return Err(EngineError::InvalidHeartRateProfile { max_hr, resting_hr });
        }
        Ok(Self { max_hr, resting_hr })
    }

    /// Heart rate reserve (max minus resting), guaranteed positive
    #[must_use]
    pub const fn reserve(self) -> u16 {
        self.max_hr - self.resting_hr
    }
}

/// Self-assessed training intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Mostly conversational running
    Easy,
    /// Mixed intensities
    Moderate,
    /// Frequent quality sessions
    Hard,
}

impl FromStr for Intensity {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "moderate" => Ok(Self::Moderate),
            "hard" => Ok(Self::Hard),
            other => Err(EngineError::invalid_input(
                "intensity",
                format!("unknown intensity '{other}'. Valid options: easy, moderate, hard"),
            )),
        }
    }
}

/// Training plan inputs that modify the progression model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingProfile {
    /// Weekly running volume in kilometers
    pub weekly_volume_km: f64,
    /// Self-assessed training intensity
    pub intensity: Intensity,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Target body weight in kilograms
    pub target_weight_kg: f64,
}

impl TrainingProfile {
    /// Validate the numeric fields of this profile
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] when weekly volume or either
    /// weight is non-positive.
    pub fn validate(&self) -> EngineResult<()> {
        if self.weekly_volume_km <= 0.0 {
            return Err(EngineError::invalid_input(
                "weekly_volume_km",
                format!("must be positive, got {}", self.weekly_volume_km),
            ));
        }
        if self.current_weight_kg <= 0.0 {
            return Err(EngineError::invalid_input(
                "current_weight_kg",
                format!("must be positive, got {}", self.current_weight_kg),
            ));
        }
        if self.target_weight_kg <= 0.0 {
            return Err(EngineError::invalid_input(
                "target_weight_kg",
                format!("must be positive, got {}", self.target_weight_kg),
            ));
        }
        Ok(())
    }
}

/// Zone-specific training velocities in km/min
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingPaces {
    /// Easy / endurance velocity
    pub easy: f64,
    /// Tempo velocity
    pub tempo: f64,
    /// Lactate threshold velocity
    pub threshold: f64,
    /// Interval (`VO2max`) velocity
    pub interval: f64,
    /// Repetition velocity, faster than the characteristic velocity
    pub repetition: f64,
}

/// One of the five heart-rate training zones
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingZone {
    /// Zone display name
    pub name: String,
    /// Zone number, 1 (lightest) through 5 (hardest)
    pub ordinal: u8,
    /// Lower heart rate bound (bpm)
    pub min_hr: u16,
    /// Upper heart rate bound (bpm)
    pub max_hr: u16,
    /// Reserve percentage band label, e.g. "50-60%"
    pub percentage: String,
    /// What the zone is for
    pub purpose: String,
    /// Target running pace for the zone (min/km)
    pub target_pace: String,
}

/// Race time projection for one tracked distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRow {
    /// Distance label, e.g. "Half Marathon"
    pub distance_label: String,
    /// Equivalent current race time, formatted
    pub current_time: String,
    /// Projected time after one month of training
    pub one_month: String,
    /// Projected time after three months of training
    pub three_months: String,
    /// Projected time after six months of training
    pub six_months: String,
    /// Total improvement over six months, percent of current time
    pub improvement_percent: f64,
    /// Race pace implied by the six-month projection (min/km)
    pub target_pace: String,
}

/// One milestone row of the progression chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Milestone label, e.g. "Now" or "3 months"
    pub milestone: String,
    /// Months from now at this milestone
    pub months: f64,
    /// Projected 5K time in minutes
    pub five_k_minutes: f64,
    /// Projected 10K time in minutes
    pub ten_k_minutes: f64,
    /// Projected half marathon time in minutes
    pub half_marathon_minutes: f64,
    /// Projected marathon time in minutes
    pub marathon_minutes: f64,
}

/// One prescribed workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecommendation {
    /// Workout name, e.g. "Tempo Run"
    pub workout_type: String,
    /// Session duration or structure, e.g. "20-40 min"
    pub duration: String,
    /// Heart rate zone the workout targets
    pub intensity_zone: String,
    /// Heart rate band, e.g. "138-151 bpm"
    pub heart_rate_range: String,
    /// Pace band in min/km, slower bound first
    pub pace_range: String,
    /// What the workout develops
    pub purpose: String,
}

/// Flat input contract consumed by the engine (one prediction request)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRequest {
    /// Reference race distance in kilometers; one of 5, 10, 21.1, 42.2
    pub race_distance_km: f64,
    /// Reference race time text, MM:SS or HH:MM:SS
    pub race_time_text: String,
    /// Maximum heart rate (bpm)
    pub max_hr: u16,
    /// Resting heart rate (bpm)
    pub resting_hr: u16,
    /// Weekly running volume in kilometers
    pub weekly_volume_km: f64,
    /// Self-assessed training intensity
    pub intensity: Intensity,
    /// Current body weight in kilograms
    pub current_weight_kg: f64,
    /// Target body weight in kilograms
    pub target_weight_kg: f64,
}

impl PredictionRequest {
    /// Training profile slice of the request
    #[must_use]
    pub const fn training_profile(&self) -> TrainingProfile {
        TrainingProfile {
            weekly_volume_km: self.weekly_volume_km,
            intensity: self.intensity,
            current_weight_kg: self.current_weight_kg,
            target_weight_kg: self.target_weight_kg,
        }
    }
}

/// Full output of one prediction request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Estimated fitness index (VDOT-equivalent)
    pub fitness_index: f64,
    /// Weekly sessions derived from training volume
    pub sessions_per_week: u32,
    /// One projection row per tracked distance
    pub rows: Vec<PredictionRow>,
    /// Progression chart, one row per milestone
    pub chart: Vec<ChartPoint>,
    /// The five heart-rate training zones
    pub zones: Vec<TrainingZone>,
    /// Prescribed workouts, gated by weekly session count
    pub workouts: Vec<WorkoutRecommendation>,
    /// When the report was computed
    pub generated_at: DateTime<Utc>,
}
