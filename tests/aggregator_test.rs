// ABOUTME: Integration tests for the metrics aggregator
// ABOUTME: Covers clamped progress ratios, unset goals, the seven-day window, and sensor-backed steps
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use anyhow::Result;
use chrono::{Duration, Timelike};
use fittrack::models::{GoalSettings, Metric};
use fittrack::storage::KeyValueStore;
use helpers::test_utils::{days_from_fixed, fixed_now, fixed_today, tracker, tracker_with_steps};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[tokio::test]
async fn test_today_progress_is_clamped_ratio() -> Result<()> {
    let t = tracker();
    t.context
        .goals()
        .save(&GoalSettings {
            sleep_goal: Some(8.0),
            calorie_goal: Some(400.0),
            ..GoalSettings::default()
        })
        .await?;
    t.store.set("@sleep_2024-3-15", "6").await?;
    t.store.set("@calories_2024-3-15", "900").await?;

    let aggregator = t.context.aggregator();
    let sleep = aggregator.today_progress_at(Metric::Sleep, fixed_now()).await;
    assert!(approx(sleep.unwrap(), 0.75));

    let calories = aggregator.today_progress_at(Metric::Calories, fixed_now()).await;
    assert!(approx(calories.unwrap(), 1.0));
    Ok(())
}

#[tokio::test]
async fn test_progress_unset_without_positive_goal() -> Result<()> {
    let t = tracker();
    t.store.set("@sleep_2024-3-15", "6").await?;
    t.store.set("@cal_goal", "0").await?;
    t.store.set("@calories_2024-3-15", "300").await?;

    let aggregator = t.context.aggregator();
    assert_eq!(aggregator.today_progress_at(Metric::Sleep, fixed_now()).await, None);
    assert_eq!(aggregator.today_progress_at(Metric::Calories, fixed_now()).await, None);
    Ok(())
}

#[tokio::test]
async fn test_weekly_series_has_seven_days_oldest_first() -> Result<()> {
    let t = tracker();
    t.context.goals().set_goal(Metric::Sleep, Some(8.0)).await?;
    t.store.set("@sleep_2024-3-9", "4").await?;
    t.store.set("@sleep_2024-3-12", "8").await?;
    t.store.set("@sleep_2024-3-15", "10").await?;
    // Outside the window
    t.store.set("@sleep_2024-3-8", "8").await?;

    let series = t
        .context
        .aggregator()
        .weekly_series_at(Metric::Sleep, fixed_now())
        .await;

    assert_eq!(series.len(), 7);
    assert_eq!(series[0].date, fixed_today() - Duration::days(6));
    assert_eq!(series[6].date, fixed_today());

    let ratios: Vec<f64> = series.iter().map(|p| p.ratio).collect();
    let expected = [0.5, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
    for (ratio, want) in ratios.iter().zip(expected) {
        assert!(approx(*ratio, want), "{ratios:?}");
    }
    assert!(approx(series[6].value, 10.0));
    Ok(())
}

#[tokio::test]
async fn test_weekly_series_without_goal_charts_zero() -> Result<()> {
    let t = tracker();
    t.store.set("@calories_2024-3-14", "250").await?;

    let series = t
        .context
        .aggregator()
        .weekly_series_at(Metric::Calories, fixed_now())
        .await;
    assert_eq!(series.len(), 7);
    assert!(series.iter().all(|p| approx(p.ratio, 0.0)));
    assert!(approx(series[5].value, 250.0));
    Ok(())
}

#[tokio::test]
async fn test_weekly_series_labels_weekdays() {
    let t = tracker();
    let series = t
        .context
        .aggregator()
        .weekly_series_at(Metric::Water, fixed_now())
        .await;
    // 2024-03-15 was a Friday
    assert_eq!(series[6].label, "Fri");
    assert_eq!(series[0].label, "Sat");
}

#[tokio::test]
async fn test_today_steps_come_from_sensor_and_are_stored() -> Result<()> {
    let t = tracker_with_steps();
    let now = fixed_now();
    let midnight = now.with_hour(0).unwrap().with_minute(0).unwrap();
    t.sensor.record_steps(days_from_fixed(-1), 9999).await;
    t.sensor.record_steps(midnight + Duration::hours(7), 1500).await;
    t.sensor.record_steps(now - Duration::minutes(5), 2500).await;
    t.context.goals().set_goal(Metric::Steps, Some(8000.0)).await?;

    let aggregator = t.context.aggregator();
    let progress = aggregator.today_progress_at(Metric::Steps, now).await;
    assert!(approx(progress.unwrap(), 0.5));
    assert_eq!(t.store.get("@step_count_2024-3-15").await?.as_deref(), Some("4000"));
    Ok(())
}

#[tokio::test]
async fn test_past_steps_use_stored_values_only() -> Result<()> {
    let t = tracker_with_steps();
    t.sensor.record_steps(days_from_fixed(-1), 9999).await;
    t.store.set("@step_count_2024-3-14", "1234").await?;

    let series = t
        .context
        .aggregator()
        .weekly_series_at(Metric::Steps, fixed_now())
        .await;
    assert!(approx(series[5].value, 1234.0));
    Ok(())
}

#[tokio::test]
async fn test_failing_sensor_falls_back_to_stored_steps() -> Result<()> {
    let t = tracker_with_steps();
    t.store.set("@step_count_2024-3-15", "3100").await?;
    t.sensor.set_failing(true);

    let value = t
        .context
        .aggregator()
        .today_value_at(Metric::Steps, fixed_now())
        .await;
    assert!(approx(value, 3100.0));
    Ok(())
}

#[tokio::test]
async fn test_dashboard_summarizes_every_metric() -> Result<()> {
    let t = tracker();
    t.context
        .goals()
        .save(&GoalSettings {
            water_goal: Some(8.0),
            ..GoalSettings::default()
        })
        .await?;
    t.context.water().add_glass_at(fixed_now()).await;
    t.context.water().add_glass_at(fixed_now()).await;

    let summary = t.context.aggregator().dashboard_at(fixed_now()).await;
    assert_eq!(summary.date, fixed_today());
    assert_eq!(summary.metrics.len(), 4);

    let water = summary.metric(Metric::Water).unwrap();
    assert!(approx(water.value, 2.0));
    assert_eq!(water.goal, Some(8.0));
    assert!(approx(water.ratio.unwrap(), 0.25));
    assert_eq!(water.percent, Some(25));

    let sleep = summary.metric(Metric::Sleep).unwrap();
    assert!(approx(sleep.value, 0.0));
    assert_eq!(sleep.ratio, None);
    assert_eq!(sleep.percent, None);
    Ok(())
}
