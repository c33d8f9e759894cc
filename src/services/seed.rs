//! Example rides written on first run.

use chrono::NaiveDate;

use crate::models::{Ride, RideId, RideLevel};
use crate::time_utils::{days_after, format_ride_date};

/// Days after today each example ride is scheduled.
pub const SEED_DAY_OFFSETS: [u64; 3] = [1, 3, 5];

/// The example rides shown when no rides exist yet, dated relative to `today`.
///
/// Content is fixed apart from the dates and freshly generated ids.
pub fn seed_rides(today: NaiveDate) -> Vec<Ride> {
    let [first, second, third] = SEED_DAY_OFFSETS.map(|d| format_ride_date(days_after(today, d)));

    vec![
        Ride {
            id: RideId::generate(),
            title: "Sunrise riverfront tempo".to_string(),
            date: first,
            time: "06:10".to_string(),
            start_location: "Riverfront Park – East gate".to_string(),
            distance_km: Some(42.0),
            pace: Some("27-30 km/h".to_string()),
            level: Some(RideLevel::Intermediate),
            notes: Some("Steady paceline, no drops. Quick espresso stop after.".to_string()),
            created_by_me: false,
        },
        Ride {
            id: RideId::generate(),
            title: "City lights social loop".to_string(),
            date: second,
            time: "19:00".to_string(),
            start_location: "Central Plaza Fountain".to_string(),
            distance_km: Some(28.0),
            pace: Some("20-24 km/h".to_string()),
            level: Some(RideLevel::AllLevels),
            notes: Some("No-drop, chatty, lights required. Perfect for new riders.".to_string()),
            created_by_me: false,
        },
        Ride {
            id: RideId::generate(),
            title: "Gravel ridge sunrise climb".to_string(),
            date: third,
            time: "07:00".to_string(),
            start_location: "Oakridge Trailhead lot".to_string(),
            distance_km: Some(55.0),
            pace: Some("25-28 km/h".to_string()),
            level: Some(RideLevel::Advanced),
            notes: Some("Mixed surface, long climbs, bring 32c+ tires and snacks.".to_string()),
            created_by_me: false,
        },
    ]
}
