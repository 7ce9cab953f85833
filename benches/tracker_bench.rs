// ABOUTME: Criterion benchmarks for the daily key store and metrics aggregation
// ABOUTME: Measures typed store round trips, workout log reads, and weekly series over the in-memory backend
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Criterion benchmarks for tracker operations.
//!
//! All benchmarks run on the in-memory backend so they measure the tracker
//! layers rather than disk I/O.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs
)]

use chrono::{Duration, Local, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack::config::environment::TrackerConfig;
use fittrack::context::TrackerContext;
use fittrack::models::{decode_number, GoalSettings, Metric};
use fittrack::sensors::SimulatedStepSensor;
use fittrack::storage::memory::InMemoryStore;
use std::sync::Arc;
use tokio::runtime::Runtime;

fn runtime() -> Runtime {
    Runtime::new().expect("tokio runtime")
}

fn context() -> TrackerContext {
    TrackerContext::new(
        TrackerConfig::default(),
        Arc::new(InMemoryStore::new()),
        Arc::new(SimulatedStepSensor::unavailable()),
    )
}

fn bench_daily_store(c: &mut Criterion) {
    let rt = runtime();
    let ctx = context();
    let store = ctx.store().clone();
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");

    let mut group = c.benchmark_group("daily_store");
    group.bench_function("record_metric", |b| {
        b.iter(|| {
            rt.block_on(async {
                store
                    .record_metric(Metric::Steps, black_box(date), black_box(4200.0))
                    .await
                    .unwrap();
            });
        });
    });

    rt.block_on(async {
        store.record_metric(Metric::Sleep, date, 7.5).await.unwrap();
    });
    group.bench_function("metric_value_hit", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(store.metric_value(Metric::Sleep, black_box(date)).await);
            });
        });
    });
    group.bench_function("metric_value_miss", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(store.metric_value(Metric::Calories, black_box(date)).await);
            });
        });
    });
    group.finish();
}

fn bench_value_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode_number");
    for raw in ["8000", "\"8000\"", "7.5", "not a number"] {
        group.bench_with_input(BenchmarkId::from_parameter(raw), raw, |b, raw| {
            b.iter(|| black_box(decode_number(black_box(raw))));
        });
    }
    group.finish();
}

fn bench_workout_log(c: &mut Criterion) {
    let rt = runtime();
    let mut group = c.benchmark_group("workout_log_list");

    for history in [0_usize, 100, 1_000] {
        let ctx = context();
        let log = ctx.workouts();
        let now = Local::now();
        rt.block_on(async {
            for i in 0..history {
                log.log_at("Running", "30", now - Duration::minutes(i as i64))
                    .await
                    .unwrap();
            }
        });

        group.throughput(Throughput::Elements(history as u64));
        group.bench_with_input(BenchmarkId::from_parameter(history), &history, |b, _| {
            b.iter(|| {
                rt.block_on(async {
                    black_box(log.list().await);
                });
            });
        });
    }
    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let rt = runtime();
    let ctx = context();
    let now = Local::now();

    rt.block_on(async {
        ctx.goals()
            .save(&GoalSettings {
                step_goal: Some(8000.0),
                water_goal: Some(8.0),
                sleep_goal: Some(8.0),
                calorie_goal: Some(500.0),
            })
            .await
            .unwrap();
        for days_back in 0..7 {
            let at = now - Duration::days(days_back);
            ctx.entries().set_today_at(Metric::Sleep, 7.0, at).await.unwrap();
            ctx.entries().set_today_at(Metric::Water, 6.0, at).await.unwrap();
        }
    });

    let aggregator = ctx.aggregator();
    let mut group = c.benchmark_group("aggregation");
    group.bench_function("weekly_series", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(aggregator.weekly_series_at(Metric::Sleep, now).await);
            });
        });
    });
    group.bench_function("dashboard", |b| {
        b.iter(|| {
            rt.block_on(async {
                black_box(aggregator.dashboard_at(now).await);
            });
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_daily_store,
    bench_value_decoding,
    bench_workout_log,
    bench_aggregation
);
criterion_main!(benches);
