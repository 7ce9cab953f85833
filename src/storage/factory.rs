// ABOUTME: Store factory for URL-based backend selection
// ABOUTME: Detects the backend from the store URL prefix and delegates every operation to it
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! Store factory
//!
//! Picks a backend from the store URL: `memory:` for the in-memory store and
//! `sqlite:<path>` for the `SQLite` file store.

use super::memory::InMemoryStore;
#[cfg(feature = "sqlite")]
use super::sqlite::SqliteStore;
use super::KeyValueStore;
use crate::constants::defaults::MEMORY_STORE_URL;
use crate::errors::{AppError, AppResult};
use async_trait::async_trait;
use tracing::{debug, info};

/// Supported store types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreType {
    /// Volatile in-memory map
    Memory,
    /// `SQLite` database file
    Sqlite,
}

/// Store instance wrapper that delegates to the selected backend
#[derive(Clone)]
pub enum Store {
    /// In-memory backend
    Memory(InMemoryStore),
    /// `SQLite` backend
    #[cfg(feature = "sqlite")]
    Sqlite(SqliteStore),
}

impl Store {
    /// Create a store from its URL
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not recognized, `SQLite` support is not
    /// compiled in, or the backend fails to open.
    pub async fn new(store_url: &str) -> AppResult<Self> {
        debug!("Detecting store type from URL: {store_url}");
        let store_type = detect_store_type(store_url)?;
        info!("Detected store type: {store_type:?}");

        match store_type {
            StoreType::Memory => Ok(Self::Memory(InMemoryStore::new())),
            #[cfg(feature = "sqlite")]
            StoreType::Sqlite => {
                let store = SqliteStore::new(store_url).await?;
                info!("SQLite store initialized successfully");
                Ok(Self::Sqlite(store))
            }
            #[cfg(not(feature = "sqlite"))]
            StoreType::Sqlite => Err(AppError::config(
                "SQLite support not enabled. Enable the 'sqlite' feature flag.",
            )),
        }
    }

    /// Descriptive string for the current backend
    #[must_use]
    pub const fn backend_info(&self) -> &'static str {
        match self {
            Self::Memory(_) => "In-memory (data is lost on exit)",
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "SQLite (persistent file)",
        }
    }

    /// Store type of the current backend
    #[must_use]
    pub const fn store_type(&self) -> StoreType {
        match self {
            Self::Memory(_) => StoreType::Memory,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => StoreType::Sqlite,
        }
    }
}

/// Detect the store type from a store URL
///
/// # Errors
///
/// Returns `CONFIG_INVALID` if the URL is neither `memory:` nor `sqlite:...`
pub fn detect_store_type(store_url: &str) -> AppResult<StoreType> {
    if store_url == MEMORY_STORE_URL {
        Ok(StoreType::Memory)
    } else if store_url.starts_with("sqlite:") {
        Ok(StoreType::Sqlite)
    } else {
        Err(AppError::config_invalid(format!(
            "Unsupported store URL format: {store_url}. \
             Supported formats: memory:, sqlite:path/to/fittrack.db"
        )))
    }
}

#[async_trait]
impl KeyValueStore for Store {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        match self {
            Self::Memory(store) => store.get(key).await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.set(key, value).await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.remove(key).await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.remove(key).await,
        }
    }

    async fn health_check(&self) -> AppResult<()> {
        match self {
            Self::Memory(store) => store.health_check().await,
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.health_check().await,
        }
    }

    fn backend_name(&self) -> &'static str {
        match self {
            Self::Memory(store) => store.backend_name(),
            #[cfg(feature = "sqlite")]
            Self::Sqlite(store) => store.backend_name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_store_type() {
        assert_eq!(detect_store_type("memory:").unwrap(), StoreType::Memory);
        assert_eq!(
            detect_store_type("sqlite:/tmp/fittrack.db").unwrap(),
            StoreType::Sqlite
        );
        assert!(detect_store_type("postgres://localhost/db").is_err());
        assert!(detect_store_type("").is_err());
    }
}
