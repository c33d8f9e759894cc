// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use chrono::NaiveDate;
use rideconnect::db::{MemoryBackend, Store};
use rideconnect::models::NewRideInput;
use rideconnect::services::{RideBoard, RidePersistence};
use std::sync::Arc;

/// Fixed "today" so seeded dates are predictable.
#[allow(dead_code)]
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
}

/// Create an in-memory store, returning the backend for fault injection.
#[allow(dead_code)]
pub fn test_store() -> (Store, Arc<MemoryBackend>) {
    let backend = Arc::new(MemoryBackend::new());
    (Store::new(backend.clone()), backend)
}

/// Create a board over a fresh in-memory store, seeded as of `test_today()`.
#[allow(dead_code)]
pub async fn test_board() -> (RideBoard, Arc<MemoryBackend>) {
    let (store, backend) = test_store();
    let persistence = RidePersistence::new(store);
    let snapshot = persistence.load_all_on(test_today()).await;
    (RideBoard::from_snapshot(persistence, snapshot), backend)
}

/// A ride form with every field filled in.
#[allow(dead_code)]
pub fn ride_input(title: &str) -> NewRideInput {
    NewRideInput {
        title: title.to_string(),
        date: "Oct 25".to_string(),
        time: "08:00".to_string(),
        start_location: "Harbour bridge, north end".to_string(),
        distance_km: "60".to_string(),
        pace: "24-27 km/h".to_string(),
        level: "Intermediate".to_string(),
        notes: "Coffee at the halfway point.".to_string(),
    }
}
