// ABOUTME: Unified error types for the prediction engine
// ABOUTME: Distinguishes malformed input (parse) from domain violations, with structured context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! # Engine Error Handling
//!
//! One crate-level error type covers the two failure classes the engine
//! knows: malformed time strings and domain violations (unsupported
//! distance, non-positive heart rate reserve, non-positive weight or
//! volume). Out-of-range table queries are not errors; they recover
//! locally through documented clamped fallbacks.

use thiserror::Error;

/// Errors produced by the prediction engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// The race time string does not match the accepted grammar
    #[error("invalid time format '{input}': expected MM:SS or HH:MM:SS")]
    InvalidTimeFormat {
        /// The rejected input string
        input: String,
    },

    /// The race distance is not one of the tracked distances
    #[error("unsupported race distance {distance_km} km (supported: 5, 10, 21.1, 42.2)")]
    UnsupportedDistance {
        /// Distance in kilometers that was rejected
        distance_km: f64,
    },

    /// Maximum heart rate does not exceed resting heart rate
    #[error("heart rate reserve must be positive (max {max_hr} bpm, resting {resting_hr} bpm)")]
    InvalidHeartRateProfile {
        /// Maximum heart rate supplied
        max_hr: u16,
        /// Resting heart rate supplied
        resting_hr: u16,
    },

    /// A numeric field is outside its valid domain
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        /// Name of the offending field
        field: &'static str,
        /// Why the value was rejected
        reason: String,
    },
}

impl EngineError {
    /// Invalid time format
    pub fn invalid_time_format(input: impl Into<String>) -> Self {
        Self::InvalidTimeFormat {
            input: input.into(),
        }
    }

    /// Invalid numeric input for a named field
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Result type alias for convenience
pub type EngineResult<T> = Result<T, EngineError>;
