// ABOUTME: Main library entry point for the FitTrack daily activity tracker
// ABOUTME: Wires storage backends, step sensors, sessions, and tracker services together
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # FitTrack
//!
//! On-device fitness tracking: an authenticated user records daily steps,
//! water glasses, sleep hours, calories burned, and workouts, sets goals, and
//! views progress for today and the trailing week.
//!
//! ## Architecture
//!
//! - **Storage**: string-keyed async key-value backends (in-memory, `SQLite`)
//!   behind the `KeyValueStore` trait
//! - **Services**: the daily key store, water tracker, goals, workout log,
//!   recommendations, calories, steps, and the metrics aggregator
//! - **Sensors**: the step sensor contract and a simulated implementation
//! - **Auth**: identity provider contract and the injected session
//!
//! Aggregation, goal math, and recommendation logic live in the
//! `fittrack-intelligence` crate and run entirely on-device.
//!
//! ## Example
//!
//! ```rust,no_run
//! use fittrack::config::environment::AppConfig;
//! use fittrack::context::TrackerContext;
//! use fittrack::models::Metric;
//!
//! # async fn example() -> fittrack::errors::AppResult<()> {
//! let config = AppConfig::from_env()?;
//! let context = TrackerContext::from_config(config).await?;
//!
//! let glasses = context.water().add_glass().await;
//! let progress = context.aggregator().today_progress(Metric::Water).await;
//! println!("{glasses} glasses, progress {progress:?}");
//! # Ok(())
//! # }
//! ```

/// Unified error handling (re-exported from `fittrack-core`)
pub mod errors;

/// Application constants (re-exported from `fittrack-core`)
pub mod constants;

/// Domain models (re-exported from `fittrack-core`)
pub mod models;

/// Environment-based configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Pluggable key-value storage backends
pub mod storage;

/// Step sensor contract and implementations
pub mod sensors;

/// Identity provider contract and session handling
pub mod auth;

/// Tracker services built on the daily key store
pub mod services;

/// Dependency injection context for the tracker services
pub mod context;

/// Shared helpers
pub mod utils;

/// Progress, recommendation, and body-metric algorithms
pub use fittrack_intelligence as intelligence;
