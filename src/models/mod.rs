// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod profile;
pub mod ride;
pub mod ride_set;

pub use profile::Profile;
pub use ride::{NewRideInput, Ride, RideId, RideLevel, ValidRide};
pub use ride_set::RideIdSet;
