// ABOUTME: Prediction assembler composing the table, pace, zone, and progression models
// ABOUTME: Produces prediction rows, chart series, and session-gated workout recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Prediction engine.
//!
//! Composes the leaf models into the output contract: one projection
//! row per tracked distance, a milestone chart series, the five
//! heart-rate zones, and a session-gated workout ladder. Every request
//! is an independent pure computation over the static reference table;
//! [`PredictionEngine::predict_batch`] fans requests across threads
//! with no coordination.

use crate::config::EngineConfig;
use crate::constants::sessions;
use crate::errors::EngineResult;
use crate::models::{
    ChartPoint, HeartRateProfile, PredictionReport, PredictionRequest, PredictionRow,
    RaceDistance, RaceResult, TrainingProfile, TrainingZone, WorkoutRecommendation,
};
use crate::pace::{characteristic_velocity, pace_range, velocity_to_pace};
use crate::progression::improvement_fraction;
use crate::time_codec::{format_time_f64, parse_time};
use crate::vdot_table::{equivalent_time, estimate_fitness};
use crate::zones::compute_zones;
use chrono::Utc;
use rayon::prelude::*;
use tracing::debug;

/// Projection horizons in months, ascending
const HORIZON_MONTHS: [f64; 3] = [1.0, 3.0, 6.0];

/// Chart milestones: label and months from now
const CHART_MILESTONES: [(&str, f64); 4] = [
    ("Now", 0.0),
    ("1 month", 1.0),
    ("3 months", 3.0),
    ("6 months", 6.0),
];

/// Derive weekly training sessions from weekly volume.
///
/// `clamp(floor(volume / 8), 2, 7)` — deterministic and pure; this
/// mapping governs the progression base rate and the workout ladder.
#[must_use]
pub fn sessions_per_week(weekly_volume_km: f64) -> u32 {
    let sessions = (weekly_volume_km / sessions::KM_PER_SESSION).floor() as i64;
    let sessions = u32::try_from(sessions.max(0)).unwrap_or(0);
    sessions.clamp(sessions::MIN_WEEKLY_SESSIONS, sessions::MAX_WEEKLY_SESSIONS)
}

/// Performance prediction engine
///
/// Carries the tuning configuration; the reference table itself is
/// static crate data. Cheap to construct, cheap to share.
#[derive(Debug, Clone, Default)]
pub struct PredictionEngine {
    config: EngineConfig,
}

impl PredictionEngine {
    /// Create an engine with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with a custom configuration
    #[must_use]
    pub const fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Validate a request and split it into typed parts
    fn validate(
        request: &PredictionRequest,
    ) -> EngineResult<(RaceResult, HeartRateProfile, TrainingProfile)> {
        let distance = RaceDistance::from_km(request.race_distance_km)?;
        let time_seconds = parse_time(&request.race_time_text)?;
        let race = RaceResult::new(distance, time_seconds)?;
        let heart = HeartRateProfile::new(request.max_hr, request.resting_hr)?;
        let training = request.training_profile();
        training.validate()?;
        Ok((race, heart, training))
    }

    /// Improvement fractions for the three projection horizons
    fn horizon_fractions(
        &self,
        training: &TrainingProfile,
        weekly_sessions: u32,
    ) -> EngineResult<[f64; 3]> {
        let mut fractions = [0.0; 3];
        for (slot, months) in fractions.iter_mut().zip(HORIZON_MONTHS) {
            *slot = improvement_fraction(training, months, weekly_sessions, &self.config.progression)?;
        }
        Ok(fractions)
    }

    /// Run one full prediction request.
    ///
    /// Estimates the fitness index once from the reference performance,
    /// then derives rows, chart, zones, and workouts from it.
    ///
    /// # Errors
    ///
    /// Propagates the codec's parse error and the domain errors raised
    /// by request validation. Out-of-range table lookups recover via
    /// clamped fallbacks and do not fail the request.
    pub fn predict(&self, request: &PredictionRequest) -> EngineResult<PredictionReport> {
        let (race, heart, training) = Self::validate(request)?;

        let fitness_index = estimate_fitness(race.distance, f64::from(race.time_seconds));
        let weekly_sessions = sessions_per_week(training.weekly_volume_km);
        debug!(
            fitness_index,
            weekly_sessions,
            distance = race.distance.label(),
            "prediction request validated"
        );

        let fractions = self.horizon_fractions(&training, weekly_sessions)?;

        let mut rows = Vec::with_capacity(RaceDistance::ALL.len());
        for distance in RaceDistance::ALL {
            rows.push(Self::build_row(fitness_index, distance, fractions)?);
        }

        let chart = self.build_chart(fitness_index, &training, weekly_sessions)?;
        let zones = compute_zones(heart, fitness_index, &self.config.paces)?;
        let workouts = self.recommendations(heart, fitness_index, weekly_sessions)?;

        Ok(PredictionReport {
            fitness_index,
            sessions_per_week: weekly_sessions,
            rows,
            chart,
            zones,
            workouts,
            generated_at: Utc::now(),
        })
    }

    /// Run independent requests in parallel.
    ///
    /// Output order matches input order. Each request only reads the
    /// static reference table; no coordination is required.
    #[must_use]
    pub fn predict_batch(
        &self,
        requests: &[PredictionRequest],
    ) -> Vec<EngineResult<PredictionReport>> {
        requests.par_iter().map(|r| self.predict(r)).collect()
    }

    /// One projection row for a tracked distance
    fn build_row(
        fitness_index: f64,
        distance: RaceDistance,
        fractions: [f64; 3],
    ) -> EngineResult<PredictionRow> {
        let current = equivalent_time(fitness_index, distance);
        let projected: Vec<f64> = fractions
            .iter()
            .map(|f| equivalent_time(fitness_index * (1.0 + f), distance))
            .collect();

        let six_months = projected[2];
        let improvement_percent = (current - six_months) / current * 100.0;

        // Race pace implied by the six-month projection, in min/km.
        let target_velocity = distance.km() / (six_months / 60.0);

        Ok(PredictionRow {
            distance_label: distance.label().to_owned(),
            current_time: format_time_f64(current),
            one_month: format_time_f64(projected[0]),
            three_months: format_time_f64(projected[1]),
            six_months: format_time_f64(six_months),
            improvement_percent,
            target_pace: velocity_to_pace(target_velocity)?,
        })
    }

    /// Chart series: one row per milestone across all distances, minutes
    fn build_chart(
        &self,
        fitness_index: f64,
        training: &TrainingProfile,
        weekly_sessions: u32,
    ) -> EngineResult<Vec<ChartPoint>> {
        let mut points = Vec::with_capacity(CHART_MILESTONES.len());
        for (label, months) in CHART_MILESTONES {
            let fraction =
                improvement_fraction(training, months, weekly_sessions, &self.config.progression)?;
            let index = fitness_index * (1.0 + fraction);
            let minutes_for = |d: RaceDistance| equivalent_time(index, d) / 60.0;

            points.push(ChartPoint {
                milestone: label.to_owned(),
                months,
                five_k_minutes: minutes_for(RaceDistance::FiveK),
                ten_k_minutes: minutes_for(RaceDistance::TenK),
                half_marathon_minutes: minutes_for(RaceDistance::HalfMarathon),
                marathon_minutes: minutes_for(RaceDistance::Marathon),
            });
        }
        Ok(points)
    }

    /// Chart series for a full request (validates and re-estimates)
    ///
    /// # Errors
    ///
    /// Same failure modes as [`Self::predict`].
    pub fn chart_series(&self, request: &PredictionRequest) -> EngineResult<Vec<ChartPoint>> {
        let (race, _, training) = Self::validate(request)?;
        let fitness_index = estimate_fitness(race.distance, f64::from(race.time_seconds));
        self.build_chart(
            fitness_index,
            &training,
            sessions_per_week(training.weekly_volume_km),
        )
    }

    /// Session-gated workout prescriptions.
    ///
    /// Easy run and long run are always present. Higher weekly session
    /// counts unlock tempo (>= 3), threshold intervals (>= 4), `VO2max`
    /// intervals (>= 5), and long intervals (>= 6); nothing unlocked at
    /// a lower count is ever removed at a higher one.
    ///
    /// # Errors
    ///
    /// Returns the zone model's domain errors for an invalid heart rate
    /// profile.
    pub fn recommendations(
        &self,
        heart: HeartRateProfile,
        fitness_index: f64,
        weekly_sessions: u32,
    ) -> EngineResult<Vec<WorkoutRecommendation>> {
        let zones = compute_zones(heart, fitness_index, &self.config.paces)?;
        let velocity = characteristic_velocity(fitness_index);

        let hr_band = |zone: &TrainingZone| format!("{}-{} bpm", zone.min_hr, zone.max_hr);

        let mut workouts = vec![
            WorkoutRecommendation {
                workout_type: "Easy Run".to_owned(),
                duration: "45-90 min".to_owned(),
                intensity_zone: zones[1].name.clone(),
                heart_rate_range: hr_band(&zones[1]),
                pace_range: pace_range(velocity * 0.65, velocity * 0.75)?,
                purpose: "Aerobic endurance, the bulk of weekly mileage".to_owned(),
            },
            WorkoutRecommendation {
                workout_type: "Long Run".to_owned(),
                duration: "90-180 min".to_owned(),
                intensity_zone: format!("{} / {}", zones[0].name, zones[1].name),
                heart_rate_range: format!("{}-{} bpm", zones[0].min_hr, zones[1].max_hr),
                pace_range: pace_range(velocity * 0.60, velocity * 0.70)?,
                purpose: "Durability and fuel economy over long distances".to_owned(),
            },
        ];

        if weekly_sessions >= sessions::TEMPO_UNLOCK {
            workouts.push(WorkoutRecommendation {
                workout_type: "Tempo Run".to_owned(),
                duration: "20-40 min".to_owned(),
                intensity_zone: zones[2].name.clone(),
                heart_rate_range: hr_band(&zones[2]),
                pace_range: pace_range(velocity * 0.80, velocity * 0.86)?,
                purpose: "Sustained comfortably-hard running".to_owned(),
            });
        }

        if weekly_sessions >= sessions::THRESHOLD_UNLOCK {
            workouts.push(WorkoutRecommendation {
                workout_type: "Threshold Intervals".to_owned(),
                duration: "4-6 x 5 min, 1 min jog recovery".to_owned(),
                intensity_zone: zones[3].name.clone(),
                heart_rate_range: hr_band(&zones[3]),
                pace_range: pace_range(velocity * 0.88, velocity * 0.92)?,
                purpose: "Raise the lactate threshold".to_owned(),
            });
        }

        if weekly_sessions >= sessions::VO2MAX_UNLOCK {
            workouts.push(WorkoutRecommendation {
                workout_type: "VO2max Intervals".to_owned(),
                duration: "8 x 400m or 5 x 1000m".to_owned(),
                intensity_zone: zones[4].name.clone(),
                heart_rate_range: hr_band(&zones[4]),
                pace_range: pace_range(velocity * 0.95, velocity)?,
                purpose: "Develop maximal aerobic power".to_owned(),
            });
        }

        if weekly_sessions >= sessions::LONG_INTERVAL_UNLOCK {
            workouts.push(WorkoutRecommendation {
                workout_type: "Long Intervals".to_owned(),
                duration: "3-4 x 2000m, 2-3 min jog recovery".to_owned(),
                intensity_zone: zones[4].name.clone(),
                heart_rate_range: hr_band(&zones[4]),
                pace_range: pace_range(velocity * 0.92, velocity * 0.97)?,
                purpose: "Aerobic capacity at race-specific effort".to_owned(),
            });
        }

        Ok(workouts)
    }
}
