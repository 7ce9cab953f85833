// ABOUTME: Helper modules for fittrack-cli
// ABOUTME: Provides output formatting utilities
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

pub mod display;
