// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage medium.
//!
//! Mirrors browser local storage: string keys, string values, and an
//! optional byte quota. Writes can be switched off, wholesale or per key,
//! to reproduce a medium that rejects writes.

use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::store::{StorageBackend, StoreError};

/// Storage medium backed by a concurrent map.
#[derive(Default)]
pub struct MemoryBackend {
    items: DashMap<String, String>,
    /// Total bytes (keys + values) the medium will hold, if limited.
    quota_bytes: Option<usize>,
    fail_writes: AtomicBool,
    /// Fully prefixed keys whose writes are rejected.
    fail_keys: Mutex<HashSet<String>>,
    /// Writes still allowed before every write is rejected, if limited.
    write_budget: Mutex<Option<usize>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a medium that refuses writes once `quota_bytes` would be exceeded.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            quota_bytes: Some(quota_bytes),
            ..Self::default()
        }
    }

    /// Make every subsequent set/remove fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Reject writes to these fully prefixed keys only.
    pub fn set_fail_keys<I, K>(&self, keys: I)
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let mut guard = self.fail_keys.lock().unwrap_or_else(|e| e.into_inner());
        guard.clear();
        guard.extend(keys.into_iter().map(Into::into));
    }

    /// Allow `writes` more successful writes, then reject the rest.
    /// `None` lifts the limit.
    pub fn set_write_budget(&self, writes: Option<usize>) {
        *self.write_budget.lock().unwrap_or_else(|e| e.into_inner()) = writes;
    }

    /// Bytes currently used, counting keys and values.
    pub fn used_bytes(&self) -> usize {
        self.items
            .iter()
            .map(|entry| entry.key().len() + entry.value().len())
            .sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn check_writable(&self, key: &str) -> Result<(), StoreError> {
        let rejected = || StoreError::Unavailable("memory medium rejecting writes".to_string());

        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(rejected());
        }
        if self
            .fail_keys
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(key)
        {
            return Err(rejected());
        }

        let mut budget = self.write_budget.lock().unwrap_or_else(|e| e.into_inner());
        match budget.as_mut() {
            Some(0) => Err(rejected()),
            Some(remaining) => {
                *remaining -= 1;
                Ok(())
            }
            None => Ok(()),
        }
    }
}

#[async_trait]
impl StorageBackend for MemoryBackend {
    fn backend_tag(&self) -> &'static str {
        "memory"
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.items.get(key).map(|v| v.value().clone()))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;

        if let Some(limit) = self.quota_bytes {
            let replaced = self
                .items
                .get(key)
                .map(|v| key.len() + v.value().len())
                .unwrap_or(0);
            let projected = self.used_bytes() - replaced + key.len() + value.len();
            if projected > limit {
                return Err(StoreError::QuotaExceeded {
                    key: key.to_string(),
                    limit,
                });
            }
        }

        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        self.check_writable(key)?;
        self.items.remove(key);
        Ok(())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.items.iter().map(|entry| entry.key().clone()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_quota_counts_replaced_value_once() {
        let backend = MemoryBackend::with_quota(10);
        backend.set_item("k", "12345").await.unwrap();
        // Replacing the same key with an equally sized value still fits.
        backend.set_item("k", "54321").await.unwrap();
        assert_eq!(backend.used_bytes(), 6);

        let err = backend.set_item("other", "123456").await.unwrap_err();
        assert!(matches!(err, StoreError::QuotaExceeded { limit: 10, .. }));
    }

    #[tokio::test]
    async fn test_fail_writes_leaves_reads_working() {
        let backend = MemoryBackend::new();
        backend.set_item("k", "v").await.unwrap();
        backend.set_fail_writes(true);

        assert!(backend.set_item("k", "w").await.is_err());
        assert!(backend.remove_item("k").await.is_err());
        assert_eq!(backend.get_item("k").await.unwrap().as_deref(), Some("v"));

        backend.set_fail_writes(false);
        backend.set_item("k", "w").await.unwrap();
        assert_eq!(backend.get_item("k").await.unwrap().as_deref(), Some("w"));
    }

    #[tokio::test]
    async fn test_fail_keys_only_affect_listed_keys() {
        let backend = MemoryBackend::new();
        backend.set_fail_keys(["bad"]);

        assert!(backend.set_item("bad", "v").await.is_err());
        backend.set_item("good", "v").await.unwrap();

        backend.set_fail_keys(Vec::<String>::new());
        backend.set_item("bad", "v").await.unwrap();
    }

    #[tokio::test]
    async fn test_write_budget() {
        let backend = MemoryBackend::new();
        backend.set_write_budget(Some(1));

        backend.set_item("a", "1").await.unwrap();
        assert!(backend.set_item("b", "2").await.is_err());
        assert!(backend.remove_item("a").await.is_err());

        backend.set_write_budget(None);
        backend.remove_item("a").await.unwrap();
    }
}
