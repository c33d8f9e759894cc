// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! RideConnect bootstrap
//!
//! Opens the local ride store, loads (or seeds) the ride board, and logs a
//! summary of what the discover and my-rides views would show.

use rideconnect::{config::Config, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging();

    // Load configuration from environment
    let config = Config::from_env()?;
    tracing::info!(
        data_dir = %config.data_dir.display(),
        prefix = %config.storage_prefix,
        "Starting RideConnect"
    );

    let state = AppState::open(config).await?;
    let board = &state.board;

    tracing::info!(
        discover = board.discover_feed().len(),
        created = board.created_rides().len(),
        joined = board.joined_rides().len(),
        bookmarked = board.bookmarked_rides().len(),
        rider = %board.profile().initials(),
        "Ride board ready"
    );

    for card in board.discover_feed() {
        tracing::info!(
            ride_id = %card.ride.id,
            title = %card.ride.title,
            date = %card.ride.date,
            time = %card.ride.time,
            joined = card.is_joined,
            bookmarked = card.is_bookmarked,
            "Ride"
        );
    }

    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("rideconnect=debug,info"));

    tracing_subscriber::registry().with(filter).with(format).init();
}
