// ABOUTME: Shared helper modules for the main crate
// ABOUTME: Local calendar-day boundaries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Local calendar-day helpers
pub mod time;
