// ABOUTME: Re-exports domain models from fittrack-core
// ABOUTME: Metrics, storage keys, goals, workout entries, and users
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub use fittrack_core::models::{
    decode_number, encode_number, AuthUser, DailyWorkoutMarker, GoalSettings, Metric,
    MetricRecord, StorageKey, WorkoutDuration, WorkoutEntry, WorkoutTimestamp,
};
