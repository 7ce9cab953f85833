// ABOUTME: Environment configuration management for storage, tracker, and logging settings
// ABOUTME: Handles environment variables, deployment modes, and typed value parsing
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Environment-based configuration

use crate::constants::defaults::{
    DATA_DIR_NAME, DEFAULT_DATABASE_FILE, MEMORY_STORE_URL, RECOMMENDED_WORKOUT_MINUTES,
    WEEKLY_WINDOW_DAYS,
};
use crate::constants::env_config;
use crate::errors::{AppError, AppResult};
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Installed on a user's device
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if this is a testing environment
    #[must_use]
    pub const fn is_testing(&self) -> bool {
        matches!(self, Self::Testing)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Key-value store location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// `sqlite:<path>` or `memory:`
    pub url: String,
}

impl StorageConfig {
    /// Default store URL: a `SQLite` file under the platform data directory
    ///
    /// Falls back to the working directory when the platform has no data
    /// directory, and to the in-memory store when `SQLite` support is compiled out.
    #[must_use]
    pub fn default_url() -> String {
        if cfg!(not(feature = "sqlite")) {
            return MEMORY_STORE_URL.to_owned();
        }
        let path = dirs::data_dir().map_or_else(
            || PathBuf::from(DEFAULT_DATABASE_FILE),
            |dir| dir.join(DATA_DIR_NAME).join(DEFAULT_DATABASE_FILE),
        );
        format!("sqlite:{}", path.display())
    }

    /// In-memory store, mostly for tests
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            url: MEMORY_STORE_URL.to_owned(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
        }
    }
}

/// Tracker behavior settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Minutes logged when a recommended workout is marked done
    pub recommended_workout_minutes: u32,
    /// Days in the trailing progress window
    pub weekly_window_days: usize,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            recommended_workout_minutes: RECOMMENDED_WORKOUT_MINUTES,
            weekly_window_days: WEEKLY_WINDOW_DAYS,
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Key-value store location
    pub storage: StorageConfig,
    /// Tracker behavior
    pub tracker: TrackerConfig,
    /// Logging output
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` when a numeric variable is set but cannot be
    /// parsed or is zero.
    pub fn from_env() -> AppResult<Self> {
        let environment =
            Environment::from_str_or_default(&env_var_or(env_config::ENVIRONMENT, "development"));

        let storage = StorageConfig {
            url: env::var(env_config::STORE_URL)
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(StorageConfig::default_url),
        };

        let recommended_workout_minutes: u32 = parse_env(
            env_config::RECOMMENDED_WORKOUT_MINUTES,
            RECOMMENDED_WORKOUT_MINUTES,
        )?;
        if recommended_workout_minutes == 0 {
            return Err(AppError::config_invalid(format!(
                "{} must be greater than zero",
                env_config::RECOMMENDED_WORKOUT_MINUTES
            )));
        }

        Ok(Self {
            environment,
            storage,
            tracker: TrackerConfig {
                recommended_workout_minutes,
                weekly_window_days: WEEKLY_WINDOW_DAYS,
            },
            logging: LoggingConfig::from_env(),
        })
    }

    /// Effective settings as structured JSON
    #[must_use]
    pub fn summary(&self) -> Value {
        json!({
            "environment": self.environment.to_string(),
            "store_url": self.storage.url,
            "recommended_workout_minutes": self.tracker.recommended_workout_minutes,
            "weekly_window_days": self.tracker.weekly_window_days,
            "log_level": self.logging.level,
        })
    }

    /// Log the effective settings; call once logging is initialized
    pub fn log_summary(&self) {
        info!(
            environment = %self.environment,
            store_url = %self.storage.url,
            "Configuration loaded: {}",
            self.summary()
        );
    }

    /// Configuration for tests: in-memory store, default tracker settings
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            environment: Environment::Testing,
            storage: StorageConfig::in_memory(),
            tracker: TrackerConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse an environment variable, using `default` when unset
fn parse_env<T>(key: &str, default: T) -> AppResult<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw.trim().parse::<T>().map_err(|e| {
            AppError::config_invalid(format!("Invalid {key} value '{raw}': {e}"))
        }),
        _ => Ok(default),
    }
}
