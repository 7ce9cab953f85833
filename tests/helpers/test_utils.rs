// ABOUTME: Tracker context builders and a fixed local clock for integration tests
// ABOUTME: Contexts run on the in-memory store with a simulated step sensor
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone};
use fittrack::config::environment::TrackerConfig;
use fittrack::context::TrackerContext;
use fittrack::sensors::SimulatedStepSensor;
use fittrack::storage::memory::InMemoryStore;
use std::sync::Arc;

/// Tracker context wired to inspectable test doubles
pub struct TestTracker {
    pub context: TrackerContext,
    pub store: InMemoryStore,
    pub sensor: SimulatedStepSensor,
}

/// Noon on 2024-03-15, local time
pub fn fixed_now() -> DateTime<Local> {
    Local
        .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
        .single()
        .expect("unambiguous local noon")
}

/// The calendar day of `fixed_now`
pub fn fixed_today() -> NaiveDate {
    fixed_now().date_naive()
}

/// `fixed_now` shifted by whole days
pub fn days_from_fixed(days: i64) -> DateTime<Local> {
    fixed_now() + Duration::days(days)
}

/// Context over a fresh in-memory store with an unavailable step sensor
pub fn tracker() -> TestTracker {
    tracker_with_sensor(SimulatedStepSensor::unavailable())
}

/// Context over a fresh in-memory store with a working step sensor
pub fn tracker_with_steps() -> TestTracker {
    tracker_with_sensor(SimulatedStepSensor::new())
}

/// Context over a fresh in-memory store and the given sensor
pub fn tracker_with_sensor(sensor: SimulatedStepSensor) -> TestTracker {
    let store = InMemoryStore::new();
    let context = TrackerContext::new(
        TrackerConfig::default(),
        Arc::new(store.clone()),
        Arc::new(sensor.clone()),
    );
    TestTracker {
        context,
        store,
        sensor,
    }
}
