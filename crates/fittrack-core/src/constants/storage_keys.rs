// ABOUTME: Storage key names used by the daily key store and global settings
// ABOUTME: Values match the keys written by earlier versions of the app so old data stays readable
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Prefix for daily step counts
pub const STEP_COUNT_PREFIX: &str = "@step_count";
/// Prefix for daily water glasses
pub const WATER_COUNT_PREFIX: &str = "@water_count";
/// Prefix for daily calories burned
pub const CALORIES_PREFIX: &str = "@calories";
/// Prefix for daily sleep hours
pub const SLEEP_PREFIX: &str = "@sleep";
/// Prefix for the per-day "recommended workout done" marker
pub const WORKOUT_TODAY_PREFIX: &str = "@workout_today";

/// Non-dated mirror of the latest water count (legacy layout)
pub const LEGACY_WATER_COUNT: &str = "@water_count";

/// Global step goal
pub const STEP_GOAL: &str = "@step_goal";
/// Global water goal (glasses)
pub const WATER_GOAL: &str = "@water_goal";
/// Global sleep goal (hours)
pub const SLEEP_GOAL: &str = "@sleep_goal";
/// Global calories-burned goal
pub const CALORIE_GOAL: &str = "@cal_goal";

/// Serialized workout history (JSON array, newest first)
pub const WORKOUTS: &str = "@workouts";
