// ABOUTME: Integration tests for the bounded improvement progression model
// ABOUTME: Pins non-negativity, monotonicity in months, the hard cap, and the weight-gain clamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use stridecast::config::ProgressionConfig;
use stridecast::models::{Intensity, TrainingProfile};
use stridecast::progression::improvement_fraction;

fn profile(intensity: Intensity, current_kg: f64, target_kg: f64) -> TrainingProfile {
    TrainingProfile {
        weekly_volume_km: 40.0,
        intensity,
        current_weight_kg: current_kg,
        target_weight_kg: target_kg,
    }
}

#[test]
fn test_zero_months_means_zero_improvement() {
    let config = ProgressionConfig::default();
    let fraction =
        improvement_fraction(&profile(Intensity::Moderate, 70.0, 68.0), 0.0, 5, &config).unwrap();
    assert!(fraction.abs() < f64::EPSILON);
}

#[test]
fn test_fraction_is_non_negative_and_non_decreasing_in_months() {
    let config = ProgressionConfig::default();
    let p = profile(Intensity::Moderate, 70.0, 68.0);
    let mut previous = 0.0;
    for months in [0.0, 0.5, 1.0, 3.0, 6.0, 12.0, 24.0] {
        let fraction = improvement_fraction(&p, months, 4, &config).unwrap();
        assert!(fraction >= 0.0);
        assert!(
            fraction >= previous,
            "fraction decreased between horizons: {previous} then {fraction} at {months} months"
        );
        previous = fraction;
    }
}

#[test]
fn test_fraction_never_exceeds_the_cap() {
    let config = ProgressionConfig::default();
    // Maximal inputs: seven sessions, hard intensity, 20 kg planned loss.
    let p = profile(Intensity::Hard, 95.0, 75.0);
    for months in [1.0, 6.0, 12.0, 120.0] {
        let fraction = improvement_fraction(&p, months, 7, &config).unwrap();
        assert!(
            fraction <= config.improvement_cap,
            "cap violated at {months} months: {fraction}"
        );
    }
    // At a long horizon the cap is hit exactly.
    let fraction = improvement_fraction(&p, 12.0, 7, &config).unwrap();
    assert!((fraction - config.improvement_cap).abs() < f64::EPSILON);
}

#[test]
fn test_fraction_plateaus_past_six_months() {
    let config = ProgressionConfig::default();
    let p = profile(Intensity::Moderate, 70.0, 70.0);
    let six = improvement_fraction(&p, 6.0, 4, &config).unwrap();
    let twelve = improvement_fraction(&p, 12.0, 4, &config).unwrap();
    // The six-month value already sits within a few percent of the plateau.
    assert!(twelve - six < 0.05 * twelve);
}

#[test]
fn test_more_sessions_never_reduce_the_fraction() {
    let config = ProgressionConfig::default();
    let p = profile(Intensity::Moderate, 70.0, 70.0);
    let mut previous = 0.0;
    for sessions in 2..=7 {
        let fraction = improvement_fraction(&p, 6.0, sessions, &config).unwrap();
        assert!(
            fraction >= previous,
            "fraction fell from {previous} to {fraction} at {sessions} sessions"
        );
        previous = fraction;
    }
}

#[test]
fn test_intensity_ordering() {
    let config = ProgressionConfig::default();
    let easy = improvement_fraction(&profile(Intensity::Easy, 70.0, 70.0), 6.0, 4, &config).unwrap();
    let moderate =
        improvement_fraction(&profile(Intensity::Moderate, 70.0, 70.0), 6.0, 4, &config).unwrap();
    let hard = improvement_fraction(&profile(Intensity::Hard, 70.0, 70.0), 6.0, 4, &config).unwrap();
    assert!(easy < moderate);
    assert!(moderate < hard);
}

#[test]
fn test_weight_loss_adds_and_weight_gain_contributes_zero() {
    let config = ProgressionConfig::default();
    let baseline =
        improvement_fraction(&profile(Intensity::Moderate, 70.0, 70.0), 3.0, 4, &config).unwrap();
    let losing =
        improvement_fraction(&profile(Intensity::Moderate, 72.0, 68.0), 3.0, 4, &config).unwrap();
    let gaining =
        improvement_fraction(&profile(Intensity::Moderate, 68.0, 72.0), 3.0, 4, &config).unwrap();

    assert!(losing > baseline);
    // Weight gain never drags the fraction below the training-only baseline.
    assert!((gaining - baseline).abs() < f64::EPSILON);
}

#[test]
fn test_invalid_inputs_are_rejected() {
    let config = ProgressionConfig::default();
    let p = profile(Intensity::Moderate, 70.0, 68.0);
    assert!(improvement_fraction(&p, -1.0, 4, &config).is_err());

    let zero_weight = profile(Intensity::Moderate, 0.0, 68.0);
    assert!(improvement_fraction(&zero_weight, 3.0, 4, &config).is_err());

    let mut zero_volume = p;
    zero_volume.weekly_volume_km = 0.0;
    assert!(improvement_fraction(&zero_volume, 3.0, 4, &config).is_err());
}
