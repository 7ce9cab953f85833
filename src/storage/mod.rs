// ABOUTME: Key-value storage abstraction for tracker persistence
// ABOUTME: Pluggable backend support (in-memory, SQLite) following the provider/factory pattern
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

/// Store factory selecting a backend from the store URL
pub mod factory;
/// In-memory store implementation
pub mod memory;
/// `SQLite` store implementation
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use factory::{detect_store_type, Store, StoreType};
pub use memory::InMemoryStore;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use async_trait::async_trait;

/// String-keyed async key-value store
///
/// Values are opaque strings. Typed access (numbers, JSON, dated keys) is
/// layered on top by `services::daily_store::DailyKeyStore`.
///
/// # Examples
///
/// ```rust,no_run
/// use fittrack::storage::{InMemoryStore, KeyValueStore};
/// # async fn example() -> fittrack::errors::AppResult<()> {
/// let store = InMemoryStore::new();
/// store.set("@water_goal", "8").await?;
/// assert_eq!(store.get("@water_goal").await?, Some("8".to_owned()));
/// assert_eq!(store.get("@sleep_goal").await?, None);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read a value; a missing key is `Ok(None)`, never an error
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_READ_FAILED` if the backend cannot be read
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrite a value unconditionally; returns once the value is persisted
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_WRITE_FAILED` if the value could not be persisted
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Delete a value; deleting a missing key succeeds
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_WRITE_FAILED` if the backend rejects the delete
    async fn remove(&self, key: &str) -> AppResult<()>;

    /// Verify the backend is reachable
    ///
    /// # Errors
    ///
    /// Returns an error if the backend is unhealthy
    async fn health_check(&self) -> AppResult<()>;

    /// Short backend description for logging
    fn backend_name(&self) -> &'static str;
}
