// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed persistence for the four ride board collections.
//!
//! Provides:
//! - a single startup load of rides, profile, bookmarks, and joined rides
//! - first-run seeding of example rides
//! - whole-value saves per collection (no merging)

use chrono::NaiveDate;

use crate::db::{keys, Store, StoreError};
use crate::models::{Profile, Ride, RideIdSet};
use crate::services::seed::seed_rides;
use crate::time_utils::local_today;

/// Everything the ride board holds, as loaded at startup.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    pub rides: Vec<Ride>,
    pub profile: Profile,
    pub bookmarks: RideIdSet,
    pub joined: RideIdSet,
}

/// Persistence service over a key-value [`Store`].
#[derive(Clone)]
pub struct RidePersistence {
    store: Store,
}

impl RidePersistence {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Load all collections, seeding example rides relative to today.
    pub async fn load_all(&self) -> Snapshot {
        self.load_all_on(local_today()).await
    }

    /// Load all collections, seeding example rides relative to `today`.
    ///
    /// The four reads run concurrently. Read failures fall back to empty
    /// defaults. If no rides are stored, the example rides are written back so
    /// the next load sees the same ones.
    pub async fn load_all_on(&self, today: NaiveDate) -> Snapshot {
        let (rides, profile, bookmarks, joined) = tokio::join!(
            self.store.get::<Vec<Ride>>(keys::RIDES, Vec::new()),
            self.store.get::<Profile>(keys::PROFILE, Profile::default()),
            self.store.get::<RideIdSet>(keys::BOOKMARKS, RideIdSet::new()),
            self.store.get::<RideIdSet>(keys::JOINED, RideIdSet::new()),
        );

        let rides = if rides.is_empty() {
            let seeded = seed_rides(today);
            match self.save_rides(&seeded).await {
                Ok(()) => tracing::info!(count = seeded.len(), "Seeded example rides"),
                Err(e) => tracing::warn!(
                    error = %e,
                    "Failed to persist example rides, showing them unsaved"
                ),
            }
            seeded
        } else {
            rides
        };

        tracing::info!(
            rides = rides.len(),
            bookmarks = bookmarks.len(),
            joined = joined.len(),
            "Ride board loaded"
        );

        Snapshot {
            rides,
            profile,
            bookmarks,
            joined,
        }
    }

    pub async fn save_rides(&self, rides: &[Ride]) -> Result<(), StoreError> {
        self.store.set(keys::RIDES, rides).await
    }

    pub async fn save_profile(&self, profile: &Profile) -> Result<(), StoreError> {
        self.store.set(keys::PROFILE, profile).await
    }

    pub async fn save_bookmarks(&self, bookmarks: &RideIdSet) -> Result<(), StoreError> {
        self.store.set(keys::BOOKMARKS, bookmarks).await
    }

    pub async fn save_joined(&self, joined: &RideIdSet) -> Result<(), StoreError> {
        self.store.set(keys::JOINED, joined).await
    }

    /// Wipe every stored collection. The next load reseeds.
    pub async fn reset(&self) -> Result<(), StoreError> {
        let removed = self.store.clear().await?;
        tracing::info!(removed, "Ride board storage reset");
        Ok(())
    }
}
