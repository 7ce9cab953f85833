// ABOUTME: Manual entry of today's metric values (sleep hours, calories, steps, water)
// ABOUTME: Validates entered numbers and overwrites today's record
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::daily_store::{persist_or_log, DailyKeyStore};
use super::water::WaterTracker;
use crate::errors::{AppError, AppResult};
use crate::models::{Metric, StorageKey};
use crate::utils::time::local_date;
use chrono::{DateTime, Local};

/// Sets today's value for a metric
#[derive(Clone)]
pub struct DailyEntryService {
    store: DailyKeyStore,
    water: WaterTracker,
}

impl DailyEntryService {
    /// Service over `store`
    #[must_use]
    pub fn new(store: DailyKeyStore) -> Self {
        Self {
            water: WaterTracker::new(store.clone()),
            store,
        }
    }

    /// Check that `value` is acceptable for `metric`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` for negative or non-finite values, and for
    /// fractional values of whole-number metrics.
    pub fn validate(metric: Metric, value: f64) -> AppResult<()> {
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::invalid_input(format!(
                "{} must be a non-negative number, got {value}",
                metric.label()
            )));
        }
        if metric.is_integral() && value.fract().abs() > f64::EPSILON {
            return Err(AppError::invalid_input(format!(
                "{} must be a whole number, got {value}",
                metric.label()
            )));
        }
        Ok(())
    }

    /// Replace today's value for `metric`
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if the value fails validation. Storage
    /// failures are logged, not returned.
    pub async fn set_today_at(
        &self,
        metric: Metric,
        value: f64,
        now: DateTime<Local>,
    ) -> AppResult<f64> {
        Self::validate(metric, value)?;

        if metric == Metric::Water {
            self.water.record_at(value, now).await;
        } else {
            let date = local_date(now);
            persist_or_log(
                StorageKey::daily(metric, date),
                self.store.record_metric(metric, date, value).await,
            );
        }
        Ok(value)
    }

    /// Replace today's value by the system clock
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` if the value fails validation
    pub async fn set_today(&self, metric: Metric, value: f64) -> AppResult<f64> {
        self.set_today_at(metric, value, Local::now()).await
    }
}
