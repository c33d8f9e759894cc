// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ordered, duplicate-free set of ride ids (bookmarks and joined rides).

use serde::{Deserialize, Serialize};

use super::ride::RideId;

/// Ride ids in insertion order, each at most once.
///
/// Stored as a plain JSON array. Ids are not checked against the ride
/// collection; an id for a ride that no longer exists simply matches nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<RideId>", into = "Vec<RideId>")]
pub struct RideIdSet {
    ids: Vec<RideId>,
}

impl RideIdSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &RideId) -> bool {
        self.ids.contains(id)
    }

    /// Append `id` if absent. Returns `true` if the set changed.
    pub fn insert(&mut self, id: RideId) -> bool {
        if self.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }

    /// Remove `id` if present. Returns `true` if the set changed.
    pub fn remove(&mut self, id: &RideId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|existing| existing != id);
        self.ids.len() != before
    }

    /// Flip membership of `id`. Returns the new membership.
    pub fn toggle(&mut self, id: &RideId) -> bool {
        if self.remove(id) {
            false
        } else {
            self.ids.push(id.clone());
            true
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &RideId> {
        self.ids.iter()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[RideId] {
        &self.ids
    }
}

/// Equality is by membership; insertion order is ignored.
impl PartialEq for RideIdSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|id| other.contains(id))
    }
}

impl Eq for RideIdSet {}

impl From<Vec<RideId>> for RideIdSet {
    /// Keeps the first occurrence of each id.
    fn from(ids: Vec<RideId>) -> Self {
        ids.into_iter().collect()
    }
}

impl From<RideIdSet> for Vec<RideId> {
    fn from(set: RideIdSet) -> Self {
        set.ids
    }
}

impl FromIterator<RideId> for RideIdSet {
    fn from_iter<I: IntoIterator<Item = RideId>>(iter: I) -> Self {
        let mut set = Self::new();
        for id in iter {
            set.insert(id);
        }
        set
    }
}
