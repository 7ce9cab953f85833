// ABOUTME: Dependency injection context wiring the store, step sensor, and session into tracker services
// ABOUTME: Services are cheap handles sharing one backend; accessors build them on demand
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Tracker context
//!
//! `TrackerContext` owns the shared dependencies and hands out focused
//! services. It replaces any global state: the storage backend, the step
//! sensor, and the auth session are all injected at construction.

use crate::auth::Session;
use crate::config::environment::{AppConfig, TrackerConfig};
use crate::errors::AppResult;
use crate::models::AuthUser;
use crate::sensors::{SimulatedStepSensor, StepSensor};
use crate::services::{
    CaloriesService, DailyEntryService, DailyKeyStore, GoalService, MetricsAggregator,
    RecommendationService, StepCounter, WaterTracker, WorkoutLog,
};
use crate::storage::factory::Store;
use crate::storage::KeyValueStore;
use std::sync::Arc;
use tracing::info;

/// Shared dependencies for the tracker services
#[derive(Clone)]
pub struct TrackerContext {
    config: TrackerConfig,
    store: DailyKeyStore,
    sensor: Arc<dyn StepSensor>,
    session: Option<Session>,
}

impl TrackerContext {
    /// Context over explicit dependencies
    #[must_use]
    pub fn new(
        config: TrackerConfig,
        backend: Arc<dyn KeyValueStore>,
        sensor: Arc<dyn StepSensor>,
    ) -> Self {
        Self {
            config,
            store: DailyKeyStore::new(backend),
            sensor,
            session: None,
        }
    }

    /// Open the configured store; the step sensor defaults to an
    /// unavailable simulated device
    ///
    /// # Errors
    ///
    /// Returns an error if the store URL is unsupported or the store cannot
    /// be opened
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let store = Store::new(&config.storage.url).await?;
        info!(backend = store.backend_info(), "tracker store opened");
        Ok(Self::new(
            config.tracker,
            Arc::new(store),
            Arc::new(SimulatedStepSensor::unavailable()),
        ))
    }

    /// Attach an auth session
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = Some(session);
        self
    }

    /// Replace the step sensor
    #[must_use]
    pub fn with_sensor(mut self, sensor: Arc<dyn StepSensor>) -> Self {
        self.sensor = sensor;
        self
    }

    /// Attached session, if any
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Signed-in user of the attached session
    #[must_use]
    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.as_ref().and_then(Session::current_user)
    }

    /// Fail unless the attached session has a signed-in user
    ///
    /// Without an attached session the context runs in local single-user
    /// mode and this always succeeds.
    ///
    /// # Errors
    ///
    /// Returns `AUTH_REQUIRED` when a session is attached but signed out
    pub fn ensure_signed_in(&self) -> AppResult<()> {
        match &self.session {
            Some(session) => session.require_user().map(|_| ()),
            None => Ok(()),
        }
    }

    /// Tracker settings
    #[must_use]
    pub const fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Typed store
    #[must_use]
    pub const fn store(&self) -> &DailyKeyStore {
        &self.store
    }

    /// Step sensor
    #[must_use]
    pub const fn sensor(&self) -> &Arc<dyn StepSensor> {
        &self.sensor
    }

    /// Water tracker
    #[must_use]
    pub fn water(&self) -> WaterTracker {
        WaterTracker::new(self.store.clone())
    }

    /// Goal settings
    #[must_use]
    pub fn goals(&self) -> GoalService {
        GoalService::new(self.store.clone())
    }

    /// Manual daily entries
    #[must_use]
    pub fn entries(&self) -> DailyEntryService {
        DailyEntryService::new(self.store.clone())
    }

    /// Workout history
    #[must_use]
    pub fn workouts(&self) -> WorkoutLog {
        WorkoutLog::new(self.store.clone())
    }

    /// Daily recommendation
    #[must_use]
    pub fn recommendations(&self) -> RecommendationService {
        RecommendationService::new(self.store.clone(), &self.config)
    }

    /// Step counter
    #[must_use]
    pub fn steps(&self) -> StepCounter {
        StepCounter::new(Arc::clone(&self.sensor), self.store.clone())
    }

    /// Calories-burned estimates
    #[must_use]
    pub fn calories(&self) -> CaloriesService {
        CaloriesService::new(self.store.clone())
    }

    /// Progress aggregation
    #[must_use]
    pub fn aggregator(&self) -> MetricsAggregator {
        MetricsAggregator::new(self.store.clone(), self.steps(), self.config.weekly_window_days)
    }
}
