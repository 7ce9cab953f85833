// ABOUTME: Adds MET-based calorie estimates to today's calories-burned total
// ABOUTME: Rounds each estimate to whole kcal before adding
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::daily_store::{persist_or_log, DailyKeyStore};
use crate::errors::AppResult;
use crate::intelligence::{estimate_calories, ActivityType};
use crate::models::{Metric, StorageKey};
use crate::utils::time::local_date;
use chrono::{DateTime, Local};
use serde::Serialize;
use tracing::info;

/// Result of adding an estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CalorieEstimate {
    /// Activity estimated
    pub activity: ActivityType,
    /// Unrounded estimate
    pub kcal: f64,
    /// Estimate added to the total
    pub rounded_kcal: f64,
    /// Today's total after the addition
    pub today_total: f64,
}

/// Calories-burned service
#[derive(Clone)]
pub struct CaloriesService {
    store: DailyKeyStore,
}

impl CaloriesService {
    /// Service over `store`
    #[must_use]
    pub const fn new(store: DailyKeyStore) -> Self {
        Self { store }
    }

    /// Calories burned today so far
    pub async fn today_total_at(&self, now: DateTime<Local>) -> f64 {
        self.store
            .metric_value(Metric::Calories, local_date(now))
            .await
            .unwrap_or(0.0)
    }

    /// Estimate an activity and add it to today's total
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a non-positive weight or duration
    pub async fn add_estimate_at(
        &self,
        activity: ActivityType,
        weight_kg: f64,
        minutes: f64,
        now: DateTime<Local>,
    ) -> AppResult<CalorieEstimate> {
        let kcal = estimate_calories(activity, weight_kg, minutes)?;
        let rounded_kcal = kcal.round();
        let date = local_date(now);
        let today_total = self.today_total_at(now).await + rounded_kcal;

        persist_or_log(
            StorageKey::daily(Metric::Calories, date),
            self.store
                .record_metric(Metric::Calories, date, today_total)
                .await,
        );
        info!(%activity, kcal = rounded_kcal, total = today_total, "calorie estimate added");

        Ok(CalorieEstimate {
            activity,
            kcal,
            rounded_kcal,
            today_total,
        })
    }

    /// Estimate and add by the system clock
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for a non-positive weight or duration
    pub async fn add_estimate(
        &self,
        activity: ActivityType,
        weight_kg: f64,
        minutes: f64,
    ) -> AppResult<CalorieEstimate> {
        self.add_estimate_at(activity, weight_kg, minutes, Local::now())
            .await
    }
}
