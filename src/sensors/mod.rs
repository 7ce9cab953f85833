// ABOUTME: Step sensor contract: availability, counts over a time range, and live update subscriptions
// ABOUTME: Subscriptions deliver unbounded update events and cancel when dropped
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// In-process sensor driven by recorded samples
pub mod simulated;

pub use simulated::SimulatedStepSensor;

use crate::errors::AppResult;
use async_trait::async_trait;
use chrono::{DateTime, Local};
use tokio::sync::mpsc;

/// Live update from the sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    /// Steps counted since the subscription started
    pub steps_since_subscribe: u64,
    /// When the sensor produced the update
    pub at: DateTime<Local>,
}

/// Stream of live step updates
///
/// Dropping the subscription (or calling `cancel`) stops delivery.
#[derive(Debug)]
pub struct StepSubscription {
    receiver: mpsc::UnboundedReceiver<StepEvent>,
}

impl StepSubscription {
    /// Wrap the receiving half of a sensor channel
    #[must_use]
    pub const fn new(receiver: mpsc::UnboundedReceiver<StepEvent>) -> Self {
        Self { receiver }
    }

    /// Next update, or `None` once the sensor stops delivering
    pub async fn recv(&mut self) -> Option<StepEvent> {
        self.receiver.recv().await
    }

    /// Stop receiving updates
    pub fn cancel(mut self) {
        self.receiver.close();
    }
}

/// Device step counter
#[async_trait]
pub trait StepSensor: Send + Sync {
    /// Whether the device has a usable step counter
    async fn is_available(&self) -> bool;

    /// Steps counted in `[start, end]`
    ///
    /// # Errors
    ///
    /// Returns `SENSOR_UNAVAILABLE` if the sensor cannot answer
    async fn step_count(&self, start: DateTime<Local>, end: DateTime<Local>) -> AppResult<u64>;

    /// Subscribe to live updates
    ///
    /// # Errors
    ///
    /// Returns `SENSOR_UNAVAILABLE` if the sensor cannot deliver updates
    async fn subscribe(&self) -> AppResult<StepSubscription>;
}
