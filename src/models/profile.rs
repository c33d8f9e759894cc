//! Rider profile model.

use serde::{Deserialize, Serialize};

/// The local rider's self-description. One per installation.
///
/// Every field is free text and may be empty. Saving replaces the whole
/// record rather than merging fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    /// City or area the rider usually starts from
    pub city: String,
    pub pace: String,
    pub typical_distance: String,
    pub ride_types: String,
    pub bio: String,
}

impl Profile {
    /// Avatar initials: first letters of the first two words of the name.
    pub fn initials(&self) -> String {
        let mut words = self.name.split_whitespace();
        match (words.next(), words.next()) {
            (Some(first), Some(second)) => first
                .chars()
                .take(1)
                .chain(second.chars().take(1))
                .flat_map(char::to_uppercase)
                .collect(),
            (Some(only), None) => only.chars().take(1).flat_map(char::to_uppercase).collect(),
            _ => "R".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Profile {
        Profile {
            name: name.to_string(),
            ..Profile::default()
        }
    }

    #[test]
    fn test_initials() {
        assert_eq!(named("ada lovelace").initials(), "AL");
        assert_eq!(named("  Marco  Pantani Jr ").initials(), "MP");
        assert_eq!(named("eddy").initials(), "E");
        assert_eq!(named("   ").initials(), "R");
    }

    #[test]
    fn test_profile_json_field_names() {
        let json = serde_json::to_value(Profile::default()).unwrap();
        assert_eq!(json["typicalDistance"], "");
        assert_eq!(json["rideTypes"], "");
    }

    #[test]
    fn test_partial_record_fills_defaults() {
        let profile: Profile = serde_json::from_str(r#"{"name":"Sam"}"#).unwrap();
        assert_eq!(profile.name, "Sam");
        assert_eq!(profile.bio, "");
    }
}
