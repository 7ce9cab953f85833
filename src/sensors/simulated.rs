// ABOUTME: Simulated step sensor holding timestamped step samples in memory
// ABOUTME: Recording steps notifies live subscribers; availability and failures are switchable
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::{StepEvent, StepSensor, StepSubscription};
use crate::constants::messages::STEP_COUNTER_UNAVAILABLE;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use chrono::{DateTime, Local};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};
use tracing::debug;

struct Subscriber {
    sender: mpsc::UnboundedSender<StepEvent>,
    steps_since_subscribe: u64,
}

#[derive(Default)]
struct SensorState {
    samples: Vec<(DateTime<Local>, u64)>,
    subscribers: Vec<Subscriber>,
}

/// In-process step sensor
///
/// Stands in for device hardware on hosts without one and in tests. Clones
/// share samples and subscribers.
#[derive(Clone)]
pub struct SimulatedStepSensor {
    available: bool,
    failing: Arc<AtomicBool>,
    state: Arc<Mutex<SensorState>>,
}

impl Default for SimulatedStepSensor {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedStepSensor {
    /// Available sensor with no samples
    #[must_use]
    pub fn new() -> Self {
        Self {
            available: true,
            failing: Arc::new(AtomicBool::new(false)),
            state: Arc::new(Mutex::new(SensorState::default())),
        }
    }

    /// Sensor reporting that the device has no step counter
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Make count queries fail (or succeed again) while staying available
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Record `steps` taken at `at` and notify live subscribers
    pub async fn record_steps(&self, at: DateTime<Local>, steps: u64) {
        let mut state = self.state.lock().await;
        state.samples.push((at, steps));

        // Closed subscriptions are pruned here
        state.subscribers.retain_mut(|subscriber| {
            subscriber.steps_since_subscribe += steps;
            subscriber
                .sender
                .send(StepEvent {
                    steps_since_subscribe: subscriber.steps_since_subscribe,
                    at,
                })
                .is_ok()
        });
        debug!(
            steps,
            subscribers = state.subscribers.len(),
            "recorded simulated steps"
        );
    }

    /// Number of live subscriptions
    pub async fn subscriber_count(&self) -> usize {
        let mut state = self.state.lock().await;
        state.subscribers.retain(|s| !s.sender.is_closed());
        state.subscribers.len()
    }
}

#[async_trait]
impl StepSensor for SimulatedStepSensor {
    async fn is_available(&self) -> bool {
        self.available
    }

    async fn step_count(&self, start: DateTime<Local>, end: DateTime<Local>) -> AppResult<u64> {
        if !self.available {
            return Err(AppError::sensor_unavailable(STEP_COUNTER_UNAVAILABLE));
        }
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::sensor_unavailable("Step count query failed"));
        }

        let state = self.state.lock().await;
        Ok(state
            .samples
            .iter()
            .filter(|(at, _)| *at >= start && *at <= end)
            .map(|(_, steps)| *steps)
            .sum())
    }

    async fn subscribe(&self) -> AppResult<StepSubscription> {
        if !self.available {
            return Err(AppError::sensor_unavailable(STEP_COUNTER_UNAVAILABLE));
        }
        let (sender, receiver) = mpsc::unbounded_channel();
        self.state.lock().await.subscribers.push(Subscriber {
            sender,
            steps_since_subscribe: 0,
        });
        Ok(StepSubscription::new(receiver))
    }
}
