// ABOUTME: Bounded improvement fraction model over a training horizon
// ABOUTME: Session-frequency base rate, intensity and weight terms, saturating time curve, hard cap
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

//! Progression model.
//!
//! The achievable improvement fraction over a horizon is:
//!
//! `min(cap, (base(sessions) * intensity + weight_term) * (1 - exp(-rate * months)))`
//!
//! The curve saturates toward a plateau past roughly four to six months
//! and never reaches the raw rate; the cap bounds the result regardless
//! of inputs. Weight gain contributes zero — it never drags the
//! fraction below the training-only baseline.

use crate::config::ProgressionConfig;
use crate::errors::{EngineError, EngineResult};
use crate::models::TrainingProfile;
use tracing::trace;

/// Achievable improvement fraction for a training horizon.
///
/// Non-negative, non-decreasing in `months`, and never above
/// `config.improvement_cap`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInput`] when `months` is negative or
/// the profile carries a non-positive weight or volume.
pub fn improvement_fraction(
    profile: &TrainingProfile,
    months: f64,
    sessions_per_week: u32,
    config: &ProgressionConfig,
) -> EngineResult<f64> {
    profile.validate()?;
    if months < 0.0 || !months.is_finite() {
        return Err(EngineError::invalid_input(
            "months",
            format!("must be non-negative and finite, got {months}"),
        ));
    }

    let base = config.base_rate(sessions_per_week);
    let intensity = config.intensity_factor(profile.intensity);

    // Planned weight loss adds improvement; weight gain clamps to zero.
    let weight_delta = (profile.current_weight_kg - profile.target_weight_kg).max(0.0);
    let raw = base.mul_add(intensity, weight_delta * config.weight_loss_rate_per_kg);

    let time_curve = 1.0 - (-config.time_curve_rate * months).exp();
    let fraction = (raw * time_curve).min(config.improvement_cap);

    trace!(
        sessions_per_week,
        months,
        raw,
        fraction,
        "improvement fraction computed"
    );
    Ok(fraction)
}
