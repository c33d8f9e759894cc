// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use rideconnect::db::StoreError;
use rideconnect::error::AppError;
use rideconnect::validation::ValidationError;

#[test]
fn test_validation_errors_are_distinguishable() {
    let missing = AppError::from(ValidationError::MissingRequiredFields);
    let distance = AppError::from(ValidationError::InvalidDistance);

    assert!(missing.is_validation());
    assert!(!missing.is_storage());
    assert_eq!(
        missing.to_string(),
        "Add a title, date, time, and meetup spot to create your ride."
    );
    assert_eq!(distance.to_string(), "Distance should be a positive number.");
}

#[test]
fn test_storage_errors() {
    let err = AppError::from(StoreError::QuotaExceeded {
        key: "app_data_rc_rides".to_string(),
        limit: 5,
    });
    assert!(err.is_storage());
    assert!(!err.is_validation());
    assert!(err.to_string().contains("app_data_rc_rides"));
}
