// ABOUTME: On-device fitness algorithms used by the FitTrack services
// ABOUTME: Progress ratios, weekly windows, workout recommendation, BMI, and calorie estimates
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # FitTrack Intelligence
//!
//! Pure functions with no I/O. Services in the main crate load values from
//! the key-value store and hand them to these algorithms.

/// Reference values for body-mass and energy-expenditure calculations
pub mod physiological_constants;

/// Goal progress ratios, percentages, and trailing day windows
pub mod progress;

/// Catalog-based daily workout recommendation
pub mod recommendation_engine;

/// Body-mass index calculation and classification
pub mod bmi;

/// MET-based calories-burned estimation
pub mod calories;

pub use bmi::{calculate_bmi, calculate_bmi_from_text, BmiCategory, BmiResult};
pub use calories::{estimate_calories, ActivityType};
pub use progress::{
    chart_ratio, percent, progress_ratio, series_from_values, trailing_window, weekday_label,
    ProgressPoint,
};
pub use recommendation_engine::{Recommendation, RecommendationEngine, RecommendationReason};
