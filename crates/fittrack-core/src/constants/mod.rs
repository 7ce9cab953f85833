// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Storage key prefixes, the workout catalog, and tracker defaults
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Constants module
//!
//! Constants are grouped into logical domains rather than one large file.

/// Storage key names and prefixes shared with previously stored data
pub mod storage_keys;

/// Fixed catalog of recommendable workouts
pub mod workouts;

/// Tracker defaults
pub mod defaults {
    /// Duration (minutes) logged when a recommended workout is marked done
    pub const RECOMMENDED_WORKOUT_MINUTES: u32 = 15;
    /// Number of days in the trailing progress window
    pub const WEEKLY_WINDOW_DAYS: usize = 7;
    /// Default `SQLite` file name under the data directory
    pub const DEFAULT_DATABASE_FILE: &str = "fittrack.db";
    /// Data directory name under the platform data dir
    pub const DATA_DIR_NAME: &str = "fittrack";
    /// URL used for the volatile in-memory store
    pub const MEMORY_STORE_URL: &str = "memory:";
}

/// Service names for structured logging
pub mod service_names {
    /// Library/CLI service name
    pub const FITTRACK: &str = "fittrack";
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Key-value store URL (`sqlite:...` or `memory:`)
    pub const STORE_URL: &str = "FITTRACK_STORE_URL";
    /// Minutes recorded for a completed recommendation
    pub const RECOMMENDED_WORKOUT_MINUTES: &str = "RECOMMENDED_WORKOUT_MINUTES";
    /// Deployment environment (development, production, testing)
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log output format (json, pretty, compact)
    pub const LOG_FORMAT: &str = "LOG_FORMAT";
}
