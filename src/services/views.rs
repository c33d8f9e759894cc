//! Derived ride lists.
//!
//! These are recomputed from the source collections on every call and are
//! never stored. All lists keep ride-collection order (newest first).

use crate::models::{Ride, RideIdSet};

/// A ride as shown in the discover list, with the user's membership flags.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RideCard<'a> {
    pub ride: &'a Ride,
    pub is_joined: bool,
    pub is_bookmarked: bool,
}

/// Rides the local user hosted.
pub fn created_rides(rides: &[Ride]) -> Vec<&Ride> {
    rides.iter().filter(|r| r.created_by_me).collect()
}

/// Rides whose id is in the joined set.
pub fn joined_rides<'a>(rides: &'a [Ride], joined: &RideIdSet) -> Vec<&'a Ride> {
    rides.iter().filter(|r| joined.contains(&r.id)).collect()
}

/// Rides whose id is in the bookmark set.
pub fn bookmarked_rides<'a>(rides: &'a [Ride], bookmarks: &RideIdSet) -> Vec<&'a Ride> {
    rides.iter().filter(|r| bookmarks.contains(&r.id)).collect()
}

/// Every ride with its joined and bookmarked flags.
pub fn discover_feed<'a>(
    rides: &'a [Ride],
    joined: &RideIdSet,
    bookmarks: &RideIdSet,
) -> Vec<RideCard<'a>> {
    rides
        .iter()
        .map(|ride| RideCard {
            ride,
            is_joined: joined.contains(&ride.id),
            is_bookmarked: bookmarks.contains(&ride.id),
        })
        .collect()
}
