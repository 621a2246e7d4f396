//! Domain identifier types with validation
//!
//! Newtype wrapper for workout identifiers. The provider decides the actual
//! format (the archive provider uses opaque strings), so validation is
//! limited to non-emptiness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Workout identifier newtype wrapper
///
/// # Examples
///
/// ```
/// use gpxport::domain::ids::WorkoutId;
/// use std::str::FromStr;
///
/// let id = WorkoutId::from_str("2022-02-03-morning-run").unwrap();
/// assert_eq!(id.as_str(), "2022-02-03-morning-run");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Creates a new WorkoutId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Workout ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the workout ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkoutId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
