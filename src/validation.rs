//! Field-level validation for ride form input.

/// Input problems the user can correct in the form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Add a title, date, time, and meetup spot to create your ride.")]
    MissingRequiredFields,

    #[error("Distance should be a positive number.")]
    InvalidDistance,

    #[error("Unknown ride level: {0}")]
    InvalidLevel(String),
}

/// Trims a required field, returning `None` if blank.
pub fn required(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: &str) -> Option<String> {
    required(value)
}

/// Parses an optional distance in kilometres.
///
/// Blank text means no distance. Anything else must be a finite number > 0.
pub fn optional_distance_km(value: &str) -> Result<Option<f64>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(km) if km.is_finite() && km > 0.0 => Ok(Some(km)),
        _ => Err(ValidationError::InvalidDistance),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_trims_whitespace() {
        assert_eq!(required("  Sunrise loop  "), Some("Sunrise loop".to_string()));
    }

    #[test]
    fn required_rejects_whitespace_only() {
        assert_eq!(required(" \t "), None);
        assert_eq!(required(""), None);
    }

    #[test]
    fn trim_optional_returns_none_for_blank() {
        assert_eq!(trim_optional("   "), None);
        assert_eq!(trim_optional(" 25 km/h "), Some("25 km/h".to_string()));
    }

    #[test]
    fn distance_blank_is_absent() {
        assert_eq!(optional_distance_km("  ").unwrap(), None);
    }

    #[test]
    fn distance_accepts_positive() {
        assert_eq!(optional_distance_km(" 42.5 ").unwrap(), Some(42.5));
    }

    #[test]
    fn distance_rejects_negative_and_zero() {
        assert_eq!(
            optional_distance_km("-5"),
            Err(ValidationError::InvalidDistance)
        );
        assert_eq!(optional_distance_km("0"), Err(ValidationError::InvalidDistance));
    }

    #[test]
    fn distance_rejects_non_numeric() {
        assert_eq!(
            optional_distance_km("abc"),
            Err(ValidationError::InvalidDistance)
        );
        assert_eq!(optional_distance_km("NaN"), Err(ValidationError::InvalidDistance));
        assert_eq!(optional_distance_km("inf"), Err(ValidationError::InvalidDistance));
    }
}
