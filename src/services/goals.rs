// ABOUTME: Loading and saving the global goal settings
// ABOUTME: Blank form inputs clear a goal; unset goals are removed rather than stored as zero
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::daily_store::{persist_or_log, DailyKeyStore};
use crate::errors::{AppError, AppResult};
use crate::models::{GoalSettings, Metric, StorageKey};
use tracing::info;

/// Parse a goal form field: blank is "no goal", anything else must be a
/// non-negative number
///
/// # Errors
///
/// Returns `INVALID_INPUT` for text that is not a non-negative number
pub fn parse_goal_input(text: &str) -> AppResult<Option<f64>> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    let goal: f64 = text
        .parse()
        .map_err(|_| AppError::invalid_input(format!("Goal must be a number, got '{text}'")))?;
    validate_goal(goal)?;
    Ok(Some(goal))
}

fn validate_goal(goal: f64) -> AppResult<()> {
    if goal.is_finite() && goal >= 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "Goal must be a non-negative number, got {goal}"
        )))
    }
}

/// Global goal settings store
#[derive(Clone)]
pub struct GoalService {
    store: DailyKeyStore,
}

impl GoalService {
    /// Service over `store`
    #[must_use]
    pub const fn new(store: DailyKeyStore) -> Self {
        Self { store }
    }

    /// Current goals; unreadable or blank values load as unset
    pub async fn load(&self) -> GoalSettings {
        let mut goals = GoalSettings::default();
        for metric in Metric::ALL {
            goals.set(metric, self.store.get_number(StorageKey::Goal(metric)).await);
        }
        goals
    }

    /// Overwrite every goal with `goals`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if any goal is negative or not finite; nothing
    /// is written in that case.
    pub async fn save(&self, goals: &GoalSettings) -> AppResult<()> {
        for metric in Metric::ALL {
            if let Some(goal) = goals.get(metric) {
                validate_goal(goal)?;
            }
        }

        for metric in Metric::ALL {
            let key = StorageKey::Goal(metric);
            let result = match goals.get(metric) {
                Some(goal) => self.store.set_number(key, goal).await,
                None => self.store.remove(key).await,
            };
            persist_or_log(key, result);
        }
        info!(?goals, "goals saved");
        Ok(())
    }

    /// Change one goal, keeping the others
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if the goal is negative or not finite
    pub async fn set_goal(&self, metric: Metric, goal: Option<f64>) -> AppResult<GoalSettings> {
        let mut goals = self.load().await;
        goals.set(metric, goal);
        self.save(&goals).await?;
        Ok(goals)
    }
}
