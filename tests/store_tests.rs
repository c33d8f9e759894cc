// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Key-value store contract tests.

use rideconnect::db::{MemoryBackend, StorageBackend, Store, StoreError};
use std::sync::Arc;

mod common;
use common::test_store;

#[tokio::test]
async fn test_set_then_get_round_trip() {
    let (store, _) = test_store();
    store
        .set("numbers", &vec![1u32, 2, 3])
        .await
        .expect("write should succeed");

    let value: Vec<u32> = store.get("numbers", Vec::new()).await;
    assert_eq!(value, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_undecodable_value_returns_default() {
    let (store, backend) = test_store();
    backend
        .set_item("app_data_numbers", "{not json")
        .await
        .unwrap();

    let value: Vec<u32> = store.get("numbers", vec![9]).await;
    assert_eq!(value, vec![9]);
}

#[tokio::test]
async fn test_wrong_shape_returns_default() {
    let (store, _) = test_store();
    store.set("numbers", &"a string").await.unwrap();

    let value: Vec<u32> = store.get("numbers", Vec::new()).await;
    assert!(value.is_empty());
}

#[tokio::test]
async fn test_delete_removes_key() {
    let (store, _) = test_store();
    store.set("k", &1u8).await.unwrap();
    store.delete("k").await.unwrap();
    assert_eq!(store.get("k", 0u8).await, 0);

    // Deleting again is harmless.
    store.delete("k").await.unwrap();
}

#[tokio::test]
async fn test_clear_only_touches_own_namespace() {
    let backend = Arc::new(MemoryBackend::new());
    let ours = Store::with_prefix(backend.clone(), "app_data_");
    let theirs = Store::with_prefix(backend.clone(), "other_app_");

    ours.set("a", &1u8).await.unwrap();
    ours.set("b", &2u8).await.unwrap();
    theirs.set("a", &3u8).await.unwrap();

    let removed = ours.clear().await.unwrap();
    assert_eq!(removed, 2);
    assert_eq!(ours.get("a", 0u8).await, 0);
    assert_eq!(theirs.get("a", 0u8).await, 3);
    assert_eq!(backend.len(), 1);
}

#[tokio::test]
async fn test_write_failure_is_reported() {
    let (store, backend) = test_store();
    backend.set_fail_writes(true);

    let err = store.set("k", &1u8).await.unwrap_err();
    assert!(matches!(err, StoreError::Unavailable(_)));
    assert!(store.delete("k").await.is_err());
    assert!(store.clear().await.is_ok(), "nothing to clear means no writes");
}

#[tokio::test]
async fn test_quota_exceeded_is_reported() {
    let store = Store::new(Arc::new(MemoryBackend::with_quota(32)));
    store.set("small", &1u8).await.unwrap();

    let big = "x".repeat(64);
    let err = store.set("big", &big).await.unwrap_err();
    assert!(matches!(err, StoreError::QuotaExceeded { limit: 32, .. }));

    // The failed write left nothing behind.
    assert_eq!(store.get("big", String::new()).await, "");
    assert_eq!(store.get("small", 0u8).await, 1);
}
