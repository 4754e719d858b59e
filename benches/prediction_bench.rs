// ABOUTME: Criterion benchmarks for the prediction engine
// ABOUTME: Measures table lookups, single predictions, and batched requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Stridecast Project

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use stridecast::engine::PredictionEngine;
use stridecast::models::{Intensity, PredictionRequest, RaceDistance};
use stridecast::vdot_table::{equivalent_time, estimate_fitness};

/// Batch size for the parallel prediction benchmark
const BATCH_SIZE: usize = 256;

fn sample_request(index: usize) -> PredictionRequest {
    // Vary the reference performance so requests hit different brackets.
    let seconds = 1_100 + (index * 37) % 600;
    let minutes = seconds / 60;
    let secs = seconds % 60;
    PredictionRequest {
        race_distance_km: 5.0,
        race_time_text: format!("{minutes}:{secs:02}"),
        max_hr: 185 + (index % 10) as u16,
        resting_hr: 50 + (index % 15) as u16,
        weekly_volume_km: 20.0 + (index % 50) as f64,
        intensity: match index % 3 {
            0 => Intensity::Easy,
            1 => Intensity::Moderate,
            _ => Intensity::Hard,
        },
        current_weight_kg: 65.0 + (index % 20) as f64,
        target_weight_kg: 63.0 + (index % 20) as f64,
    }
}

fn bench_table_lookups(c: &mut Criterion) {
    c.bench_function("estimate_fitness_5k", |b| {
        b.iter(|| estimate_fitness(black_box(RaceDistance::FiveK), black_box(1_230.0)));
    });

    c.bench_function("equivalent_time_marathon", |b| {
        b.iter(|| equivalent_time(black_box(52.3), black_box(RaceDistance::Marathon)));
    });
}

fn bench_single_prediction(c: &mut Criterion) {
    let engine = PredictionEngine::new();
    let request = sample_request(0);

    c.bench_function("predict_single", |b| {
        b.iter(|| engine.predict(black_box(&request)));
    });
}

fn bench_batch_prediction(c: &mut Criterion) {
    let engine = PredictionEngine::new();
    let requests: Vec<PredictionRequest> = (0..BATCH_SIZE).map(sample_request).collect();

    let mut group = c.benchmark_group("predict_batch");
    group.throughput(Throughput::Elements(BATCH_SIZE as u64));
    group.bench_function("batch_256", |b| {
        b.iter(|| engine.predict_batch(black_box(&requests)));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_table_lookups,
    bench_single_prediction,
    bench_batch_prediction
);
criterion_main!(benches);
