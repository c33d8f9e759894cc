// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! RideConnect: discover, host, join, and bookmark group bike rides.
//!
//! This crate provides the local data layer behind the ride board: a
//! namespaced key-value store, the ride and profile models, typed
//! persistence with first-run seeding, the mutations the UI invokes, and
//! the derived ride lists it renders.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod time_utils;
pub mod validation;

use config::Config;
use db::{FileBackend, Store, StoreError};
use services::{RideBoard, RidePersistence};
use std::sync::Arc;

/// Application state: configuration plus the loaded ride board.
pub struct AppState {
    pub config: Config,
    pub board: RideBoard,
}

impl AppState {
    /// Open file-backed storage from `config` and load the ride board.
    pub async fn open(config: Config) -> Result<Self, StoreError> {
        let backend = FileBackend::open(&config.data_dir).await?;
        let store = Store::with_prefix(Arc::new(backend), config.storage_prefix.clone());
        Ok(Self::with_store(config, store).await)
    }

    /// Load the ride board over an existing store.
    pub async fn with_store(config: Config, store: Store) -> Self {
        let board = RideBoard::load(RidePersistence::new(store)).await;
        Self { config, board }
    }
}
