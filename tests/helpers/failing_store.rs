// ABOUTME: Key-value store double that fails reads or writes on demand
// ABOUTME: Wraps an in-memory store so successful operations still behave normally
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use async_trait::async_trait;
use fittrack::errors::{AppError, AppResult};
use fittrack::storage::memory::InMemoryStore;
use fittrack::storage::KeyValueStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory store with switchable read and write failures
#[derive(Clone, Default)]
pub struct FailingStore {
    pub inner: InMemoryStore,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
    fail_key_prefix: Arc<Mutex<Option<String>>>,
}

impl FailingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Fail only writes to keys starting with `prefix`
    pub fn fail_writes_to(&self, prefix: &str) {
        *self.fail_key_prefix.lock().unwrap() = Some(prefix.to_owned());
    }

    fn write_fails(&self, key: &str) -> bool {
        self.fail_writes.load(Ordering::SeqCst)
            || self
                .fail_key_prefix
                .lock()
                .unwrap()
                .as_deref()
                .is_some_and(|prefix| key.starts_with(prefix))
    }
}

#[async_trait]
impl KeyValueStore for FailingStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::storage_read(key, "injected read failure"));
        }
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: &str) -> AppResult<()> {
        if self.write_fails(key) {
            return Err(AppError::storage_write(key, "injected write failure"));
        }
        self.inner.set(key, value).await
    }

    async fn remove(&self, key: &str) -> AppResult<()> {
        if self.write_fails(key) {
            return Err(AppError::storage_write(key, "injected write failure"));
        }
        self.inner.remove(key).await
    }

    async fn health_check(&self) -> AppResult<()> {
        self.inner.health_check().await
    }

    fn backend_name(&self) -> &'static str {
        "failing-test"
    }
}
