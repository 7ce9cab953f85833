// ABOUTME: Tracker services layered on the daily key store
// ABOUTME: Water, goals, daily entries, workouts, recommendations, steps, calories, and aggregation
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Tracker services
//!
//! Services sit at the tracker boundary: storage read failures read as
//! absent and storage write failures are logged and dropped, so no storage
//! error ever reaches the caller. Validation, auth, and sensor errors are
//! returned.

/// Metric aggregation for today and the trailing week
pub mod aggregator;
/// Calories-burned estimation feeding today's total
pub mod calories;
/// Typed access to the key-value store
pub mod daily_store;
/// Manual entry of today's metric values
pub mod entries;
/// Global goal settings
pub mod goals;
/// Daily workout recommendation and completion marker
pub mod recommendation;
/// Sensor-backed step counting and the live tracker task
pub mod steps;
/// Water glasses with the legacy mirror key
pub mod water;
/// Workout history
pub mod workout_log;

pub use aggregator::{DashboardSummary, MetricSummary, MetricsAggregator};
pub use calories::{CalorieEstimate, CaloriesService};
pub use daily_store::DailyKeyStore;
pub use entries::DailyEntryService;
pub use goals::{parse_goal_input, GoalService};
pub use recommendation::{DailyRecommendation, RecommendationService};
pub use steps::{StepCounter, StepTrackerHandle};
pub use water::WaterTracker;
pub use workout_log::WorkoutLog;
