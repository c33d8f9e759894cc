// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ride board: in-memory collections plus the mutations the UI invokes.
//!
//! Every mutation computes the next collection, persists it, and only then
//! swaps it into memory. A failed write therefore leaves the in-memory copy
//! at its last persisted value. Mutations take `&mut self`, so two writes to
//! the same collection can never overlap.

use crate::error::Result;
use crate::models::{NewRideInput, Profile, Ride, RideId, RideIdSet};
use crate::services::persistence::{RidePersistence, Snapshot};
use crate::services::views::{self, RideCard};

/// Owner of the rides, profile, bookmark set, and joined set.
pub struct RideBoard {
    persistence: RidePersistence,
    rides: Vec<Ride>,
    profile: Profile,
    bookmarks: RideIdSet,
    joined: RideIdSet,
}

impl RideBoard {
    /// Load (and seed if needed) all collections from storage.
    pub async fn load(persistence: RidePersistence) -> Self {
        let snapshot = persistence.load_all().await;
        Self::from_snapshot(persistence, snapshot)
    }

    /// Build a board from already loaded collections.
    pub fn from_snapshot(persistence: RidePersistence, snapshot: Snapshot) -> Self {
        Self {
            persistence,
            rides: snapshot.rides,
            profile: snapshot.profile,
            bookmarks: snapshot.bookmarks,
            joined: snapshot.joined,
        }
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn bookmarks(&self) -> &RideIdSet {
        &self.bookmarks
    }

    pub fn joined(&self) -> &RideIdSet {
        &self.joined
    }

    pub fn persistence(&self) -> &RidePersistence {
        &self.persistence
    }

    // ─── Derived Views ───────────────────────────────────────────

    pub fn created_rides(&self) -> Vec<&Ride> {
        views::created_rides(&self.rides)
    }

    pub fn joined_rides(&self) -> Vec<&Ride> {
        views::joined_rides(&self.rides, &self.joined)
    }

    pub fn bookmarked_rides(&self) -> Vec<&Ride> {
        views::bookmarked_rides(&self.rides, &self.bookmarks)
    }

    pub fn discover_feed(&self) -> Vec<RideCard<'_>> {
        views::discover_feed(&self.rides, &self.joined, &self.bookmarks)
    }

    // ─── Mutations ───────────────────────────────────────────────

    /// Host a new ride.
    ///
    /// The ride is prepended to the ride list and added to the joined set;
    /// each collection is written separately. If the joined write fails, the
    /// previous ride list is written back. Should that also fail, the new ride
    /// stays in memory because it is what storage now holds.
    pub async fn create_ride(&mut self, input: &NewRideInput) -> Result<Ride> {
        let valid = input.validate().inspect_err(|e| {
            tracing::debug!(error = %e, "Ride form rejected");
        })?;

        let ride = Ride::hosted(RideId::generate(), valid);

        let mut next_rides = Vec::with_capacity(self.rides.len() + 1);
        next_rides.push(ride.clone());
        next_rides.extend(self.rides.iter().cloned());

        self.persistence
            .save_rides(&next_rides)
            .await
            .inspect_err(|e| tracing::warn!(ride_id = %ride.id, error = %e, "Failed to save new ride"))?;
        let previous_rides = std::mem::replace(&mut self.rides, next_rides);

        if !self.joined.contains(&ride.id) {
            let mut next_joined = self.joined.clone();
            next_joined.insert(ride.id.clone());

            if let Err(e) = self.persistence.save_joined(&next_joined).await {
                tracing::error!(
                    ride_id = %ride.id,
                    error = %e,
                    "Failed to save joined rides for new ride, reverting ride list"
                );
                match self.persistence.save_rides(&previous_rides).await {
                    Ok(()) => self.rides = previous_rides,
                    Err(revert_err) => tracing::error!(
                        ride_id = %ride.id,
                        error = %revert_err,
                        "Failed to revert ride list; new ride remains stored without joined entry"
                    ),
                }
                return Err(e.into());
            }
            self.joined = next_joined;
        }

        tracing::info!(ride_id = %ride.id, title = %ride.title, "Ride created");
        Ok(ride)
    }

    /// Join a ride. Returns `false` (and writes nothing) if already joined.
    pub async fn join_ride(&mut self, id: &RideId) -> Result<bool> {
        if self.joined.contains(id) {
            return Ok(false);
        }
        let mut next = self.joined.clone();
        next.insert(id.clone());
        self.commit_joined(next).await?;
        tracing::debug!(ride_id = %id, "Joined ride");
        Ok(true)
    }

    /// Leave a ride. Returns `false` (and writes nothing) if not joined.
    pub async fn leave_ride(&mut self, id: &RideId) -> Result<bool> {
        if !self.joined.contains(id) {
            return Ok(false);
        }
        let mut next = self.joined.clone();
        next.remove(id);
        self.commit_joined(next).await?;
        tracing::debug!(ride_id = %id, "Left ride");
        Ok(true)
    }

    /// Flip a bookmark. Returns whether the ride is bookmarked afterwards.
    pub async fn toggle_bookmark(&mut self, id: &RideId) -> Result<bool> {
        let mut next = self.bookmarks.clone();
        let bookmarked = next.toggle(id);

        self.persistence
            .save_bookmarks(&next)
            .await
            .inspect_err(|e| tracing::warn!(ride_id = %id, error = %e, "Failed to save bookmarks"))?;
        self.bookmarks = next;

        tracing::debug!(ride_id = %id, bookmarked, "Toggled bookmark");
        Ok(bookmarked)
    }

    /// Replace the profile wholesale.
    pub async fn update_profile(&mut self, profile: Profile) -> Result<()> {
        self.persistence
            .save_profile(&profile)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to save profile"))?;
        self.profile = profile;
        tracing::debug!("Profile updated");
        Ok(())
    }

    async fn commit_joined(&mut self, next: RideIdSet) -> Result<()> {
        self.persistence
            .save_joined(&next)
            .await
            .inspect_err(|e| tracing::warn!(error = %e, "Failed to save joined rides"))?;
        self.joined = next;
        Ok(())
    }
}
