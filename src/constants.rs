// ABOUTME: Re-exports tracker constants from fittrack-core
// ABOUTME: Storage keys, workout catalog, defaults, and environment variable names
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub use fittrack_core::constants::{
    defaults, env_config, service_names, storage_keys, workouts,
};

/// User-facing messages
pub mod messages {
    /// Shown when the device has no usable step sensor
    pub const STEP_COUNTER_UNAVAILABLE: &str = "Step counter not available on this device.";
}
