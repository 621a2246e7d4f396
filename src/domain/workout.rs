//! Workout domain model
//!
//! A [`Workout`] is owned entirely by the external provider; gpxport only
//! ever reads it.

use crate::domain::activity::ActivityType;
use crate::domain::ids::WorkoutId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A recorded workout, as returned by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Provider-assigned identifier
    pub id: WorkoutId,

    /// Activity category
    pub activity: ActivityType,

    /// When recording started
    pub start: DateTime<Utc>,

    /// When recording ended
    pub end: DateTime<Utc>,

    /// Total distance in meters, if the provider recorded one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
}

impl Workout {
    /// Recording duration
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }

    /// File name for this workout's exported GPX document
    ///
    /// Template is `{yyyy-MM-dd_hh.mm.ss}_{DisplayName}.gpx` where the
    /// timestamp is the workout start in a 12-hour clock. Fixed for
    /// compatibility with previously exported archives.
    pub fn export_file_name(&self) -> String {
        format!(
            "{}_{}.gpx",
            self.start.format("%Y-%m-%d_%I.%M.%S"),
            self.activity.display_name()
        )
    }

    /// Track name as embedded in the GPX `<name>` element
    ///
    /// Medium date, short time, then the activity display name.
    pub fn track_name(&self) -> String {
        format!(
            "{} {}",
            self.start.format("%b %-d, %Y %-I:%M %p"),
            self.activity.display_name()
        )
    }
}
