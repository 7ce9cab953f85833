// ABOUTME: Shared test helpers and utilities for integration tests
// ABOUTME: Exports tracker context builders, fixed clocks, and a failure-injecting store
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod failing_store;
pub mod test_utils;
