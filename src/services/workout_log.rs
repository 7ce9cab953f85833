// ABOUTME: Workout history stored as one JSON array, newest entry first
// ABOUTME: Appends insert at the head and rewrite the whole sequence
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::daily_store::{persist_or_log, DailyKeyStore};
use crate::errors::{AppError, AppResult};
use crate::models::{StorageKey, WorkoutEntry};
use chrono::{DateTime, Local};
use serde_json::Value;
use tracing::{info, warn};

/// Workout history
#[derive(Clone)]
pub struct WorkoutLog {
    store: DailyKeyStore,
}

impl WorkoutLog {
    /// Log over `store`
    #[must_use]
    pub const fn new(store: DailyKeyStore) -> Self {
        Self { store }
    }

    /// Stored history, one undecoded value per entry
    async fn raw_entries(&self) -> Vec<Value> {
        self.store
            .get_json(StorageKey::Workouts)
            .await
            .unwrap_or_default()
    }

    /// Every logged workout, most recent first
    ///
    /// Entries that do not decode are skipped here but kept in the store.
    pub async fn list(&self) -> Vec<WorkoutEntry> {
        self.raw_entries()
            .await
            .into_iter()
            .filter_map(|raw| match serde_json::from_value(raw) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!(error = %e, "skipping undecodable workout entry");
                    None
                }
            })
            .collect()
    }

    /// Insert `entry` at the head of the history
    ///
    /// Duration is kept exactly as entered: no unit conversion, no range check.
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` when the type or duration is empty, or
    /// `SERIALIZATION_ERROR` if the entry cannot be encoded. Storage failures
    /// are logged, not returned.
    pub async fn append(&self, entry: WorkoutEntry) -> AppResult<()> {
        if entry.workout_type.is_empty() {
            return Err(AppError::missing_field("workout type"));
        }
        if entry.duration.as_str().is_empty() {
            return Err(AppError::missing_field("duration"));
        }

        let encoded = serde_json::to_value(&entry)?;
        let mut entries = self.raw_entries().await;
        info!(workout = %entry.workout_type, duration = %entry.duration, "workout logged");
        entries.insert(0, encoded);
        persist_or_log(
            StorageKey::Workouts,
            self.store.set_json(StorageKey::Workouts, &entries).await,
        );
        Ok(())
    }

    /// Log a workout performed at `now`
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` when the type or duration is empty
    pub async fn log_at(
        &self,
        workout_type: &str,
        duration: &str,
        now: DateTime<Local>,
    ) -> AppResult<WorkoutEntry> {
        let entry = WorkoutEntry::new(workout_type, duration, now);
        self.append(entry.clone()).await?;
        Ok(entry)
    }

    /// Log a workout by the system clock
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` when the type or duration is empty
    pub async fn log(&self, workout_type: &str, duration: &str) -> AppResult<WorkoutEntry> {
        self.log_at(workout_type, duration, Local::now()).await
    }
}
