// ABOUTME: Core data models for daily metrics, goals, workouts, and signed-in users
// ABOUTME: Re-exports Metric, StorageKey, GoalSettings, WorkoutEntry and related types
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Typed keys**: storage keys are built from `StorageKey`, never by ad-hoc
//!   string concatenation, while rendering the exact strings older data used
//! - **Explicit absence**: every optional value is an `Option`, so "not set"
//!   is never conflated with zero
//! - **Serializable**: all persisted models round-trip through JSON

mod goals;
mod metric;
mod user;
mod value;
mod workout;

pub use goals::GoalSettings;
pub use metric::{Metric, MetricRecord, StorageKey};
pub use user::AuthUser;
pub use value::{decode_number, encode_number};
pub use workout::{DailyWorkoutMarker, WorkoutDuration, WorkoutEntry, WorkoutTimestamp};
