// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Group ride model for storage and the ride form.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::validation::{self, ValidationError};

/// Opaque ride identifier. Never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RideId(String);

impl RideId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for RideId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for RideId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for RideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who a ride is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RideLevel {
    Beginner,
    Intermediate,
    Advanced,
    #[serde(rename = "All Levels")]
    AllLevels,
}

impl RideLevel {
    pub const ALL: [RideLevel; 4] = [
        RideLevel::Beginner,
        RideLevel::Intermediate,
        RideLevel::Advanced,
        RideLevel::AllLevels,
    ];

    /// Label shown on ride cards (also the stored form).
    pub fn label(self) -> &'static str {
        match self {
            RideLevel::Beginner => "Beginner",
            RideLevel::Intermediate => "Intermediate",
            RideLevel::Advanced => "Advanced",
            RideLevel::AllLevels => "All Levels",
        }
    }
}

impl fmt::Display for RideLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RideLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or_else(|| ValidationError::InvalidLevel(s.to_string()))
    }
}

/// Stored ride record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ride {
    pub id: RideId,
    pub title: String,
    /// Display date, e.g. "Oct 19"
    pub date: String,
    /// Meetup time, e.g. "06:10"
    pub time: String,
    pub start_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
    /// Expected pace, e.g. "27-30 km/h"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<RideLevel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Set once when the local user hosts the ride.
    #[serde(default)]
    pub created_by_me: bool,
}

impl Ride {
    /// Build a ride hosted by the local user from validated input.
    pub fn hosted(id: RideId, ride: ValidRide) -> Self {
        Self {
            id,
            title: ride.title,
            date: ride.date,
            time: ride.time,
            start_location: ride.start_location,
            distance_km: ride.distance_km,
            pace: ride.pace,
            level: ride.level,
            notes: ride.notes,
            created_by_me: true,
        }
    }
}

/// Raw text as typed into the create-ride form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRideInput {
    pub title: String,
    pub date: String,
    pub time: String,
    pub start_location: String,
    pub distance_km: String,
    pub pace: String,
    /// One of the level labels, or blank for none.
    pub level: String,
    pub notes: String,
}

/// Ride form input that passed validation, trimmed and typed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRide {
    pub title: String,
    pub date: String,
    pub time: String,
    pub start_location: String,
    pub distance_km: Option<f64>,
    pub pace: Option<String>,
    pub level: Option<RideLevel>,
    pub notes: Option<String>,
}

impl NewRideInput {
    /// Check the form and produce a typed ride.
    ///
    /// Required fields are checked before distance, and distance before level,
    /// so the user sees one error at a time.
    pub fn validate(&self) -> Result<ValidRide, ValidationError> {
        let (Some(title), Some(date), Some(time), Some(start_location)) = (
            validation::required(&self.title),
            validation::required(&self.date),
            validation::required(&self.time),
            validation::required(&self.start_location),
        ) else {
            return Err(ValidationError::MissingRequiredFields);
        };

        let distance_km = validation::optional_distance_km(&self.distance_km)?;

        let level = validation::trim_optional(&self.level)
            .map(|label| label.parse::<RideLevel>())
            .transpose()?;

        Ok(ValidRide {
            title,
            date,
            time,
            start_location,
            distance_km,
            pace: validation::trim_optional(&self.pace),
            level,
            notes: validation::trim_optional(&self.notes),
        })
    }
}
