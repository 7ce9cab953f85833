// ABOUTME: Core types and constants for the FitTrack daily activity tracker
// ABOUTME: Foundation crate with error handling, storage keys, and domain models
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![deny(unsafe_code)]

//! # FitTrack Core
//!
//! Foundation crate providing shared types and constants for the FitTrack
//! tracker. It changes infrequently so the rest of the workspace benefits
//! from incremental compilation.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Storage key prefixes, workout catalog, and defaults
//! - **models**: Metrics, goals, workout log entries, and users

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Metric, `GoalSettings`, `WorkoutEntry`, etc.)
pub mod models;
