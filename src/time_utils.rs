// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for ride date formatting.

use chrono::{Days, Local, NaiveDate};

/// Today's date in the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date the way ride cards show it, e.g. `Oct 19`.
pub fn format_ride_date(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// `days` days after `date`, saturating at the calendar's end.
pub fn days_after(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_ride_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 9).unwrap();
        assert_eq!(format_ride_date(date), "Oct 9");
    }

    #[test]
    fn test_days_after_crosses_month() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 30).unwrap();
        assert_eq!(
            days_after(date, 3),
            NaiveDate::from_ymd_opt(2026, 11, 2).unwrap()
        );
    }
}
