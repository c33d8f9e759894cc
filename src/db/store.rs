// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Namespaced key-value store with typed JSON operations.
//!
//! The store sits on top of a [`StorageBackend`], a raw string medium in the
//! shape of browser local storage. Every key is scoped by a prefix so that
//! [`Store::clear`] only touches this application's entries.
//!
//! Reads never fail outward: a missing key, an unreadable medium, or a value
//! that no longer decodes all yield the caller's default. Writes report a
//! [`StoreError`] so callers can roll back.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::config::DEFAULT_STORAGE_PREFIX;

/// Raw storage medium. Keys arrive fully prefixed.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Short name for logs.
    fn backend_tag(&self) -> &'static str;

    /// Read a value, `None` if the key is absent.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write a value, replacing any previous one.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove a key. Removing an absent key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// All keys currently held by the medium, in any order.
    async fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Errors from the storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage quota exceeded writing {key} (limit {limit} bytes)")]
    QuotaExceeded { key: String, limit: usize },

    #[error("Failed to encode value: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Key-value store handle. Cloning shares the same medium.
#[derive(Clone)]
pub struct Store {
    backend: Option<Arc<dyn StorageBackend>>,
    prefix: String,
}

impl Store {
    /// Create a store over `backend` using the default namespace.
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self::with_prefix(backend, DEFAULT_STORAGE_PREFIX)
    }

    /// Create a store over `backend` scoped to `prefix`.
    pub fn with_prefix(backend: Arc<dyn StorageBackend>, prefix: impl Into<String>) -> Self {
        Self {
            backend: Some(backend),
            prefix: prefix.into(),
        }
    }

    /// Create a store with no medium behind it.
    ///
    /// Reads return their defaults and every write fails with
    /// [`StoreError::Unavailable`].
    pub fn new_offline() -> Self {
        Self {
            backend: None,
            prefix: DEFAULT_STORAGE_PREFIX.to_string(),
        }
    }

    /// The namespace prefix applied to every key.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Helper to get the backend or return an error if offline.
    fn get_backend(&self) -> Result<&Arc<dyn StorageBackend>, StoreError> {
        self.backend
            .as_ref()
            .ok_or_else(|| StoreError::Unavailable("no storage medium (offline mode)".to_string()))
    }

    fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Read and decode `key`, falling back to `default`.
    pub async fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let backend = match self.get_backend() {
            Ok(backend) => backend,
            Err(e) => {
                tracing::warn!(key, error = %e, "Read skipped, using default");
                return default;
            }
        };

        let raw = match backend.get_item(&self.full_key(key)).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                tracing::warn!(
                    key,
                    backend = backend.backend_tag(),
                    error = %e,
                    "Error reading from storage, using default"
                );
                return default;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(key, error = %e, "Stored value did not decode, using default");
                default
            }
        }
    }

    /// Encode and write `value` under `key`.
    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let backend = self.get_backend()?;
        let encoded = serde_json::to_string(value)?;
        backend
            .set_item(&self.full_key(key), &encoded)
            .await
            .inspect_err(|e| tracing::error!(key, error = %e, "Error writing to storage"))?;
        tracing::debug!(key, bytes = encoded.len(), "Stored value");
        Ok(())
    }

    /// Remove `key`.
    pub async fn delete(&self, key: &str) -> Result<(), StoreError> {
        self.get_backend()?
            .remove_item(&self.full_key(key))
            .await
            .inspect_err(|e| tracing::error!(key, error = %e, "Error deleting from storage"))
    }

    /// Remove every key under this store's prefix, leaving other keys alone.
    ///
    /// Returns the number of keys removed.
    pub async fn clear(&self) -> Result<usize, StoreError> {
        let backend = self.get_backend()?;
        let keys = backend.keys().await?;

        let mut removed = 0;
        for key in keys.iter().filter(|k| k.starts_with(&self.prefix)) {
            backend
                .remove_item(key)
                .await
                .inspect_err(|e| tracing::error!(key = %key, error = %e, "Error clearing storage"))?;
            removed += 1;
        }

        tracing::info!(prefix = %self.prefix, removed, "Cleared storage namespace");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryBackend;

    #[tokio::test]
    async fn test_get_missing_returns_default() {
        let store = Store::new(Arc::new(MemoryBackend::new()));
        let value: Vec<String> = store.get("missing", vec!["fallback".to_string()]).await;
        assert_eq!(value, vec!["fallback".to_string()]);
    }

    #[tokio::test]
    async fn test_keys_are_prefixed() {
        let backend = Arc::new(MemoryBackend::new());
        let store = Store::with_prefix(backend.clone(), "ns_");
        store.set("answer", &42u32).await.unwrap();

        let raw = backend.get_item("ns_answer").await.unwrap();
        assert_eq!(raw.as_deref(), Some("42"));
    }

    #[tokio::test]
    async fn test_offline_store() {
        let store = Store::new_offline();
        assert_eq!(store.get("anything", 7u32).await, 7);
        assert!(matches!(
            store.set("anything", &1u32).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(store.delete("anything").await.is_err());
        assert!(store.clear().await.is_err());
    }
}
