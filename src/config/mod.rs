// ABOUTME: Configuration module for environment-driven tracker settings
// ABOUTME: Storage location, tracker defaults, and logging options
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Configuration management
//!
//! Configuration comes from environment variables only; there is no config
//! file.

/// Environment-based configuration (`AppConfig::from_env`)
pub mod environment;

pub use environment::{AppConfig, Environment, StorageConfig, TrackerConfig};
