// ABOUTME: Daily workout recommendation backed by the workout history and a per-day completion marker
// ABOUTME: Completing the recommendation logs a fixed-duration workout and writes the marker once per day
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::daily_store::{persist_or_log, DailyKeyStore};
use super::workout_log::WorkoutLog;
use crate::config::environment::TrackerConfig;
use crate::errors::{AppError, AppResult};
use crate::intelligence::{Recommendation, RecommendationEngine};
use crate::models::{DailyWorkoutMarker, StorageKey, WorkoutEntry};
use crate::utils::time::local_date;
use chrono::{DateTime, Datelike, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::{debug, info, warn};

/// Today's recommendation state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DailyRecommendation {
    /// Not yet completed today
    Pending(Recommendation),
    /// Completed today; the marker names the workout that was done
    Done(DailyWorkoutMarker),
}

impl DailyRecommendation {
    /// Workout name shown to the user
    #[must_use]
    pub fn workout(&self) -> &str {
        match self {
            Self::Pending(rec) => rec.workout,
            Self::Done(marker) => &marker.workout_type,
        }
    }

    /// Whether today's workout has been completed
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done(_))
    }
}

enum DayState {
    Done(DailyWorkoutMarker),
    Open(Vec<WorkoutEntry>),
}

/// Picks and completes the daily recommended workout
#[derive(Clone)]
pub struct RecommendationService {
    store: DailyKeyStore,
    log: WorkoutLog,
    engine: RecommendationEngine,
    completion_minutes: u32,
}

impl RecommendationService {
    /// Service over `store` using the default catalog
    #[must_use]
    pub fn new(store: DailyKeyStore, config: &TrackerConfig) -> Self {
        Self::with_engine(store, RecommendationEngine::default(), config)
    }

    /// Service with a custom engine
    #[must_use]
    pub fn with_engine(
        store: DailyKeyStore,
        engine: RecommendationEngine,
        config: &TrackerConfig,
    ) -> Self {
        Self {
            log: WorkoutLog::new(store.clone()),
            store,
            engine,
            completion_minutes: config.recommended_workout_minutes,
        }
    }

    /// Completion marker for `date`; an empty stored value counts as absent
    pub async fn marker_on(&self, date: NaiveDate) -> Option<DailyWorkoutMarker> {
        self.store
            .get(StorageKey::WorkoutMarker(date))
            .await
            .filter(|name| !name.is_empty())
            .map(|workout_type| DailyWorkoutMarker { date, workout_type })
    }

    async fn day_state(&self, date: NaiveDate) -> DayState {
        match self.marker_on(date).await {
            Some(marker) => DayState::Done(marker),
            None => DayState::Open(self.log.list().await),
        }
    }

    fn resolve<R: Rng + ?Sized>(&self, state: DayState, rng: &mut R) -> AppResult<DailyRecommendation> {
        match state {
            DayState::Done(marker) => Ok(DailyRecommendation::Done(marker)),
            DayState::Open(history) => self
                .engine
                .recommend(&history, rng)
                .map(DailyRecommendation::Pending)
                .ok_or_else(|| AppError::internal("Workout catalog is empty")),
        }
    }

    /// Today's recommendation using `rng` for the random fallback
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the catalog is empty
    pub async fn today_with_rng_at<R: Rng + Send + ?Sized>(
        &self,
        now: DateTime<Local>,
        rng: &mut R,
    ) -> AppResult<DailyRecommendation> {
        let state = self.day_state(local_date(now)).await;
        self.resolve(state, rng)
    }

    /// Today's recommendation at `now`
    ///
    /// The random fallback is seeded from the local date, so every query on
    /// the same day agrees.
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the catalog is empty
    pub async fn today_at(&self, now: DateTime<Local>) -> AppResult<DailyRecommendation> {
        let date = local_date(now);
        let state = self.day_state(date).await;
        self.resolve(state, &mut day_rng(date))
    }

    /// Today's recommendation by the system clock
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the catalog is empty
    pub async fn today(&self) -> AppResult<DailyRecommendation> {
        self.today_at(Local::now()).await
    }

    /// Mark `workout` as today's completed recommendation
    ///
    /// Writes the marker, then logs a workout with the configured duration.
    /// A second call on the same day returns the existing marker and logs
    /// nothing. If the marker cannot be persisted no workout is logged, so a
    /// retry never produces a duplicate entry.
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` if `workout` is empty
    pub async fn mark_done_at(
        &self,
        workout: &str,
        now: DateTime<Local>,
    ) -> AppResult<DailyWorkoutMarker> {
        let date = local_date(now);
        if let Some(existing) = self.marker_on(date).await {
            debug!(date = %date, workout = %existing.workout_type, "recommendation already completed");
            return Ok(existing);
        }

        if workout.is_empty() {
            return Err(AppError::missing_field("workout type"));
        }

        let key = StorageKey::WorkoutMarker(date);
        if persist_or_log(key, self.store.set(key, workout).await) {
            let entry = WorkoutEntry::new(workout, self.completion_minutes.to_string(), now);
            self.log.append(entry).await?;
            info!(date = %date, workout, "recommended workout completed");
        } else {
            warn!(date = %date, workout, "completion marker not saved, workout not logged");
        }

        Ok(DailyWorkoutMarker {
            date,
            workout_type: workout.to_owned(),
        })
    }

    /// Complete whatever is recommended today, using `rng` for the fallback
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the catalog is empty
    pub async fn mark_recommended_done_with_rng_at<R: Rng + Send + ?Sized>(
        &self,
        now: DateTime<Local>,
        rng: &mut R,
    ) -> AppResult<DailyWorkoutMarker> {
        match self.today_with_rng_at(now, rng).await? {
            DailyRecommendation::Done(marker) => Ok(marker),
            DailyRecommendation::Pending(rec) => self.mark_done_at(rec.workout, now).await,
        }
    }

    /// Complete whatever is recommended today
    ///
    /// # Errors
    ///
    /// Returns `INTERNAL_ERROR` if the catalog is empty
    pub async fn mark_recommended_done_at(
        &self,
        now: DateTime<Local>,
    ) -> AppResult<DailyWorkoutMarker> {
        match self.today_at(now).await? {
            DailyRecommendation::Done(marker) => Ok(marker),
            DailyRecommendation::Pending(rec) => self.mark_done_at(rec.workout, now).await,
        }
    }
}

/// Rng for the random fallback on `date`
fn day_rng(date: NaiveDate) -> StdRng {
    StdRng::seed_from_u64(u64::from(date.num_days_from_ce().unsigned_abs()))
}
