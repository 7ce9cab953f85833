// ABOUTME: Command handlers for fittrack-cli
// ABOUTME: Daily metric entry, goals, workouts and recommendations, progress and BMI
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub mod daily;
pub mod goals;
pub mod progress;
pub mod workout;
