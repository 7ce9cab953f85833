// ABOUTME: Unified error type and error codes shared across the FitTrack workspace
// ABOUTME: Maps auth, storage, sensor, validation, and config failures to stable codes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Unified Error Handling System
//!
//! Every fallible operation in the workspace returns [`AppResult`]. The
//! [`ErrorCode`] groups failures by range so callers can decide how to degrade:
//! storage read failures become "absent", write failures are dropped at the
//! tracker boundary, and authentication messages are shown verbatim.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Authentication (1000-1999)
    /// No signed-in user
    #[serde(rename = "AUTH_REQUIRED")]
    AuthRequired = 1000,
    /// Identity provider rejected the credentials or request
    #[serde(rename = "AUTH_INVALID")]
    AuthInvalid = 1001,

    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was empty
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,

    // Devices (5000-5999)
    /// Step sensor missing or refused the request
    #[serde(rename = "SENSOR_UNAVAILABLE")]
    SensorUnavailable = 5000,

    // Configuration (6000-6999)
    /// Generic configuration problem
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration value present but unusable
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Reading from the key-value store failed
    #[serde(rename = "STORAGE_READ_FAILED")]
    StorageReadFailed = 9001,
    /// Writing to the key-value store failed
    #[serde(rename = "STORAGE_WRITE_FAILED")]
    StorageWriteFailed = 9002,
    /// JSON encode/decode failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::AuthRequired => "Sign in is required",
            Self::AuthInvalid => "Authentication failed",
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::SensorUnavailable => "Step counter not available on this device",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageReadFailed => "Reading stored data failed",
            Self::StorageWriteFailed => "Saving data failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether the failure originated in the persistence layer
    #[must_use]
    pub const fn is_storage(&self) -> bool {
        matches!(
            self,
            Self::StorageReadFailed | Self::StorageWriteFailed | Self::SerializationError
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Signed-in user, if known
    pub user_id: Option<Uuid>,
    /// Storage key or resource involved
    pub resource_id: Option<String>,
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a user ID to the error context
    #[must_use]
    pub fn with_user_id(mut self, user_id: Uuid) -> Self {
        self.context.user_id = Some(user_id);
        self
    }

    /// Add a resource identifier (usually a storage key) to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Identity provider rejected a request; the message is shown verbatim
    #[must_use]
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Operation needs a signed-in user
    #[must_use]
    pub fn auth_required() -> Self {
        Self::new(ErrorCode::AuthRequired, "No user is signed in")
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Required field left empty
    #[must_use]
    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{field} must not be empty"),
        )
    }

    /// Store read failure for `key`
    #[must_use]
    pub fn storage_read(key: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageReadFailed, message).with_resource_id(key)
    }

    /// Store write failure for `key`
    #[must_use]
    pub fn storage_write(key: &str, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageWriteFailed, message).with_resource_id(key)
    }

    /// Serialization failure
    #[must_use]
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SerializationError, message)
    }

    /// Step sensor is missing or failed
    #[must_use]
    pub fn sensor_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::SensorUnavailable, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Configuration value is present but invalid
    #[must_use]
    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigInvalid, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Auth messages come from the identity provider and are surfaced as-is
        if self.code == ErrorCode::AuthInvalid {
            return f.write_str(&self.message);
        }
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::serialization(error.to_string()).with_source(error)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::internal(format!("{error:#}"))
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        Self::new(ErrorCode::InternalError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_message_is_verbatim() {
        let error = AppError::auth_invalid("Wrong password for user@example.com");
        assert_eq!(error.to_string(), "Wrong password for user@example.com");
    }

    #[test]
    fn test_storage_error_carries_key() {
        let error = AppError::storage_write("@water_goal", "disk full");
        assert_eq!(error.code, ErrorCode::StorageWriteFailed);
        assert!(error.code.is_storage());
        assert_eq!(error.context.resource_id.as_deref(), Some("@water_goal"));
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_code_serializes_as_screaming_snake() {
        let json = serde_json::to_string(&ErrorCode::SensorUnavailable).unwrap();
        assert_eq!(json, "\"SENSOR_UNAVAILABLE\"");
    }

    #[test]
    fn test_serde_json_conversion() {
        let parse_error = serde_json::from_str::<u32>("not json").unwrap_err();
        let error: AppError = parse_error.into();
        assert_eq!(error.code, ErrorCode::SerializationError);
        assert!(error.source.is_some());
    }
}
