// ABOUTME: Integration tests for the sensor-backed step counter and live tracker task
// ABOUTME: Covers unavailable sensors, midnight-to-now counts, live recounts, and shutdown
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use anyhow::Result;
use chrono::{Duration, Local};
use fittrack::errors::ErrorCode;
use fittrack::storage::KeyValueStore;
use fittrack::utils::time::local_date;
use helpers::test_utils::{days_from_fixed, fixed_now, tracker, tracker_with_steps};
use std::time::Duration as StdDuration;
use tokio::time::timeout;

#[tokio::test]
async fn test_unavailable_sensor_reports_message() {
    let t = tracker();
    let steps = t.context.steps();

    assert!(!steps.is_available().await);
    let err = steps.count_today_at(fixed_now()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::SensorUnavailable);
    assert_eq!(err.message, "Step counter not available on this device.");
    assert!(steps.start_live_tracker().await.is_err());
}

#[tokio::test]
async fn test_count_covers_local_midnight_to_now() -> Result<()> {
    let t = tracker_with_steps();
    t.sensor.record_steps(days_from_fixed(-1), 700).await;
    t.sensor.record_steps(fixed_now() - Duration::hours(3), 1200).await;
    t.sensor.record_steps(fixed_now() + Duration::hours(1), 500).await;

    let count = t.context.steps().count_today_at(fixed_now()).await?;
    assert_eq!(count, 1200);
    assert_eq!(t.store.get("@step_count_2024-3-15").await?.as_deref(), Some("1200"));
    Ok(())
}

#[tokio::test]
async fn test_live_tracker_recounts_on_every_update() -> Result<()> {
    let t = tracker_with_steps();
    let handle = t.context.steps().start_live_tracker().await?;
    assert_eq!(handle.latest(), 0);
    assert_eq!(t.sensor.subscriber_count().await, 1);

    let mut updates = handle.updates();
    t.sensor.record_steps(Local::now(), 250).await;
    timeout(StdDuration::from_secs(2), updates.changed()).await??;
    assert_eq!(*updates.borrow_and_update(), 250);

    t.sensor.record_steps(Local::now(), 100).await;
    timeout(StdDuration::from_secs(2), updates.changed()).await??;
    assert_eq!(handle.latest(), 350);

    let key = format!("@step_count_{}", local_date(Local::now()).format("%Y-%-m-%-d"));
    assert_eq!(t.store.get(&key).await?.as_deref(), Some("350"));

    handle.shutdown().await;
    assert_eq!(t.sensor.subscriber_count().await, 0);
    Ok(())
}

#[tokio::test]
async fn test_dropping_handle_stops_tracker() -> Result<()> {
    let t = tracker_with_steps();
    let handle = t.context.steps().start_live_tracker().await?;
    let mut updates = handle.updates();
    drop(handle);

    // The task exits and drops the sender side of the watch channel
    timeout(StdDuration::from_secs(2), async {
        while updates.changed().await.is_ok() {}
    })
    .await?;
    assert_eq!(t.sensor.subscriber_count().await, 0);
    Ok(())
}
