//! Workout activity types
//!
//! The activity type drives the display name used in GPX track names and
//! exported file names, and the default listing filter.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workout activity type
///
/// The variant set mirrors the activity categories the provider records.
/// Anything the exporter doesn't specifically know about maps to [`Other`],
/// which still exports fine under the generic "Workout" display name.
///
/// [`Other`]: ActivityType::Other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityType {
    Cycling,
    Running,
    Walking,
    Hiking,
    Swimming,
    CrossCountrySkiing,
    DownhillSkiing,
    Snowboarding,
    Skating,
    Other,
}

/// Activity types the exporter lists by default (everything but `Other`)
pub const SUPPORTED_ACTIVITIES: &[ActivityType] = &[
    ActivityType::Cycling,
    ActivityType::Running,
    ActivityType::Walking,
    ActivityType::Hiking,
    ActivityType::Swimming,
    ActivityType::CrossCountrySkiing,
    ActivityType::DownhillSkiing,
    ActivityType::Snowboarding,
    ActivityType::Skating,
];

impl ActivityType {
    /// Human-readable name used in track names and file names
    ///
    /// This mapping is fixed for output compatibility.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::Cycling => "Cycle",
            ActivityType::Running => "Run",
            ActivityType::Walking => "Walk",
            ActivityType::Hiking => "Hike",
            ActivityType::Swimming => "Swim",
            ActivityType::CrossCountrySkiing => "Cross-country Skiing",
            ActivityType::DownhillSkiing => "Downhill Skiing",
            ActivityType::Snowboarding => "Snowboarding",
            ActivityType::Skating => "Skating",
            ActivityType::Other => "Workout",
        }
    }
}

impl fmt::Display for ActivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for ActivityType {
    type Err = String;

    /// Parses the kebab-case form used in configuration and CLI filters
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cycling" => Ok(ActivityType::Cycling),
            "running" => Ok(ActivityType::Running),
            "walking" => Ok(ActivityType::Walking),
            "hiking" => Ok(ActivityType::Hiking),
            "swimming" => Ok(ActivityType::Swimming),
            "cross-country-skiing" => Ok(ActivityType::CrossCountrySkiing),
            "downhill-skiing" => Ok(ActivityType::DownhillSkiing),
            "snowboarding" => Ok(ActivityType::Snowboarding),
            "skating" => Ok(ActivityType::Skating),
            "other" => Ok(ActivityType::Other),
            other => Err(format!("Unknown activity type: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(ActivityType::Cycling, "Cycle")]
    #[test_case(ActivityType::Running, "Run")]
    #[test_case(ActivityType::Walking, "Walk")]
    #[test_case(ActivityType::Hiking, "Hike")]
    #[test_case(ActivityType::Swimming, "Swim")]
    #[test_case(ActivityType::CrossCountrySkiing, "Cross-country Skiing")]
    #[test_case(ActivityType::DownhillSkiing, "Downhill Skiing")]
    #[test_case(ActivityType::Snowboarding, "Snowboarding")]
    #[test_case(ActivityType::Skating, "Skating")]
    #[test_case(ActivityType::Other, "Workout")]
    fn test_display_names(activity: ActivityType, expected: &str) {
        assert_eq!(activity.display_name(), expected);
    }

    #[test]
    fn test_from_str_round_trip() {
        for activity in SUPPORTED_ACTIVITIES {
            let serialized = serde_json::to_string(activity).unwrap();
            let kebab = serialized.trim_matches('"');
            assert_eq!(ActivityType::from_str(kebab).unwrap(), *activity);
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert!(ActivityType::from_str("rowing-machine").is_err());
    }

    #[test]
    fn test_supported_excludes_other() {
        assert!(!SUPPORTED_ACTIVITIES.contains(&ActivityType::Other));
    }
}
