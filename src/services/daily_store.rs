// ABOUTME: Typed daily key store over a string key-value backend
// ABOUTME: Structured keys in, lenient numbers and JSON out; read failures degrade to absent
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::errors::AppResult;
use crate::models::{decode_number, encode_number, Metric, MetricRecord, StorageKey};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Typed store keyed by `StorageKey`
///
/// `get` never fails: a missing key and a failed read both return `None`
/// (the failure is logged). `set` reports failures so callers decide whether
/// to surface or drop them.
#[derive(Clone)]
pub struct DailyKeyStore {
    backend: Arc<dyn KeyValueStore>,
}

impl DailyKeyStore {
    /// Wrap a backend
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Underlying backend
    #[must_use]
    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    /// Raw stored text
    pub async fn get(&self, key: StorageKey) -> Option<String> {
        let rendered = key.to_string();
        match self.backend.get(&rendered).await {
            Ok(value) => value,
            Err(e) => {
                warn!(key = %rendered, error = %e, "store read failed, treating value as absent");
                None
            }
        }
    }

    /// Overwrite raw text
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_WRITE_FAILED` if the backend rejects the write
    pub async fn set(&self, key: StorageKey, value: &str) -> AppResult<()> {
        self.backend.set(&key.to_string(), value).await
    }

    /// Delete a key
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_WRITE_FAILED` if the backend rejects the delete
    pub async fn remove(&self, key: StorageKey) -> AppResult<()> {
        self.backend.remove(&key.to_string()).await
    }

    /// Stored number, decoded leniently
    pub async fn get_number(&self, key: StorageKey) -> Option<f64> {
        self.get(key).await.as_deref().and_then(decode_number)
    }

    /// Store a number
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_WRITE_FAILED` if the backend rejects the write
    pub async fn set_number(&self, key: StorageKey, value: f64) -> AppResult<()> {
        self.set(key, &encode_number(value)).await
    }

    /// Record stored for `metric` on `date`
    pub async fn metric_record(&self, metric: Metric, date: NaiveDate) -> Option<MetricRecord> {
        let value = self.get_number(StorageKey::daily(metric, date)).await?;
        Some(MetricRecord {
            metric,
            date,
            value,
        })
    }

    /// Value recorded for `metric` on `date`
    pub async fn metric_value(&self, metric: Metric, date: NaiveDate) -> Option<f64> {
        self.metric_record(metric, date).await.map(|record| record.value)
    }

    /// Record `value` for `metric` on `date`, replacing any earlier value
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_WRITE_FAILED` if the backend rejects the write
    pub async fn record_metric(&self, metric: Metric, date: NaiveDate, value: f64) -> AppResult<()> {
        self.set_number(StorageKey::daily(metric, date), value).await
    }

    /// Stored JSON value; undecodable JSON reads as absent
    pub async fn get_json<T: DeserializeOwned>(&self, key: StorageKey) -> Option<T> {
        let raw = self.get(key).await?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key = %key, error = %e, "stored JSON could not be decoded, treating as absent");
                None
            }
        }
    }

    /// Store a value as JSON
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` or `STORAGE_WRITE_FAILED`
    pub async fn set_json<T: Serialize + Sync>(&self, key: StorageKey, value: &T) -> AppResult<()> {
        let raw = serde_json::to_string(value)?;
        self.set(key, &raw).await
    }
}

/// Log and drop a failed write at the tracker boundary
///
/// Returns whether the write was persisted.
pub(crate) fn persist_or_log(key: StorageKey, result: AppResult<()>) -> bool {
    match result {
        Ok(()) => true,
        Err(e) => {
            warn!(key = %key, error = %e, "store write failed, value not persisted");
            false
        }
    }
}
