// ABOUTME: Running performance prediction engine built on VDOT reference tables
// ABOUTME: One race result in; race projections, heart-rate zones, and workouts out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

#![deny(unsafe_code)]

//! # Stridecast
//!
//! Estimates a runner's aerobic fitness from one self-reported race
//! result and projects race times, heart-rate training zones, and
//! workout prescriptions over 1/3/6-month horizons.
//!
//! Every operation is a pure, synchronous function of its inputs plus
//! the static reference table; requests are independent and safe to
//! compute in parallel.
//!
//! ## Modules
//!
//! - **errors**: `EngineError` / `EngineResult` for parse and domain failures
//! - **models**: per-request value objects (requests, zones, rows, reports)
//! - **time_codec**: `MM:SS` / `HH:MM:SS` parsing and formatting
//! - **vdot_table**: static reference table with bidirectional bracket interpolation
//! - **pace**: training pace derivation from the fitness index
//! - **zones**: five Karvonen heart-rate zones
//! - **progression**: bounded, time-saturating improvement model
//! - **engine**: the prediction assembler
//! - **config** / **constants**: tuning knobs and their documented defaults
//!
//! ## Example
//!
//! ```
//! use stridecast::engine::PredictionEngine;
//! use stridecast::models::{Intensity, PredictionRequest};
//!
//! # fn main() -> stridecast::errors::EngineResult<()> {
//! let engine = PredictionEngine::new();
//! let report = engine.predict(&PredictionRequest {
//!     race_distance_km: 5.0,
//!     race_time_text: "20:30".to_owned(),
//!     max_hr: 190,
//!     resting_hr: 60,
//!     weekly_volume_km: 40.0,
//!     intensity: Intensity::Moderate,
//!     current_weight_kg: 70.0,
//!     target_weight_kg: 68.0,
//! })?;
//! assert_eq!(report.zones.len(), 5);
//! # Ok(())
//! # }
//! ```

/// Unified error handling for parse and domain failures
pub mod errors;

/// Per-request value objects: requests, paces, zones, rows, reports
pub mod models;

/// Race time parsing and formatting
pub mod time_codec;

/// Static VDOT reference table and bracket interpolation
pub mod vdot_table;

/// Training pace derivation from the fitness index
pub mod pace;

/// Karvonen heart-rate zone model
pub mod zones;

/// Bounded improvement progression model
pub mod progression;

/// Prediction assembler
pub mod engine;

/// Env-overridable engine configuration
pub mod config;

/// Physiological constants, defined once as data
pub mod constants;

pub use engine::PredictionEngine;
pub use errors::{EngineError, EngineResult};
pub use models::{PredictionReport, PredictionRequest};
