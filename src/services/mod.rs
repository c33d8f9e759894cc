// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - persistence, mutations, and derived views.

pub mod board;
pub mod persistence;
pub mod seed;
pub mod views;

pub use board::RideBoard;
pub use persistence::{RidePersistence, Snapshot};
pub use seed::seed_rides;
pub use views::RideCard;
