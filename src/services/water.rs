// ABOUTME: Water glass tracking for the current local day
// ABOUTME: Mirrors the latest count under the legacy non-dated key and falls back to it on read
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use super::daily_store::{persist_or_log, DailyKeyStore};
use crate::models::{Metric, StorageKey};
use crate::utils::time::local_date;
use chrono::{DateTime, Local};
use tracing::debug;

/// Water intake tracker
///
/// Older data only has the non-dated `@water_count` key. Today's count reads
/// the dated key first and falls back to that legacy value when the dated key
/// is absent. Past days never fall back.
#[derive(Clone)]
pub struct WaterTracker {
    store: DailyKeyStore,
}

impl WaterTracker {
    /// Tracker over `store`
    #[must_use]
    pub const fn new(store: DailyKeyStore) -> Self {
        Self { store }
    }

    /// Today's stored count, with the legacy fallback; `None` when neither key exists
    pub async fn stored_count_at(&self, now: DateTime<Local>) -> Option<f64> {
        let today = local_date(now);
        if let Some(count) = self.store.metric_value(Metric::Water, today).await {
            return Some(count);
        }
        let legacy = self.store.get_number(StorageKey::LegacyWater).await;
        if legacy.is_some() {
            debug!(date = %today, "using legacy water count");
        }
        legacy
    }

    /// Glasses drunk today
    pub async fn count_at(&self, now: DateTime<Local>) -> f64 {
        self.stored_count_at(now).await.unwrap_or(0.0)
    }

    /// Glasses drunk today, by the system clock
    pub async fn count(&self) -> f64 {
        self.count_at(Local::now()).await
    }

    /// Add one glass and return the new count
    pub async fn add_glass_at(&self, now: DateTime<Local>) -> f64 {
        let next = self.count_at(now).await + 1.0;
        self.record_at(next, now).await;
        next
    }

    /// Add one glass by the system clock
    pub async fn add_glass(&self) -> f64 {
        self.add_glass_at(Local::now()).await
    }

    /// Write today's count to the dated key and the legacy mirror
    ///
    /// Returns whether both writes were persisted.
    pub async fn record_at(&self, count: f64, now: DateTime<Local>) -> bool {
        let today = local_date(now);
        let dated = persist_or_log(
            StorageKey::daily(Metric::Water, today),
            self.store.record_metric(Metric::Water, today, count).await,
        );
        let legacy = persist_or_log(
            StorageKey::LegacyWater,
            self.store.set_number(StorageKey::LegacyWater, count).await,
        );
        dated && legacy
    }
}
