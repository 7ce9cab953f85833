// ABOUTME: Re-exports the unified error types from fittrack-core
// ABOUTME: Keeps `crate::errors` paths stable for the main crate and its binaries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub use fittrack_core::errors::{AppError, AppResult, ErrorCode, ErrorContext};
