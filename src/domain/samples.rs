//! Sample types delivered by the provider
//!
//! Heart-rate data arrives as one fully-materialized, ascending-sorted
//! snapshot per workout. Location data arrives lazily: a workout's route is
//! split into [`RouteSegment`]s (one per contiguous GPS recording, pauses
//! start a new segment), and each segment yields its points in
//! [`LocationBatch`]es pulled from an asynchronous stream that may fail on
//! any pull.

use crate::domain::result::Result;
use chrono::{DateTime, Utc};
use futures::stream::{self, BoxStream, StreamExt};
use serde::{Deserialize, Serialize};

/// One heart-rate measurement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeartRateSample {
    /// When the measurement was taken
    pub timestamp: DateTime<Utc>,

    /// Beats per minute
    pub bpm: f64,
}

/// One recorded GPS location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocationPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,

    /// Longitude in decimal degrees
    pub longitude: f64,

    /// Altitude in meters above sea level
    pub altitude: f64,

    /// When the location was recorded
    pub timestamp: DateTime<Utc>,
}

/// A group of location points delivered together by the provider
pub type LocationBatch = Vec<LocationPoint>;

/// Pull-based asynchronous stream of location batches
pub type BatchStream = BoxStream<'static, Result<LocationBatch>>;

/// One contiguous GPS recording within a workout's route
///
/// Batches arrive in non-decreasing timestamp order within a segment.
/// Segments themselves are processed in the order the provider returns
/// them; gpxport does not re-sort them.
pub struct RouteSegment {
    stream: BatchStream,
}

impl RouteSegment {
    /// Wraps an already-boxed batch stream
    pub fn new(stream: BatchStream) -> Self {
        Self { stream }
    }

    /// Builds a segment from in-memory batches
    ///
    /// Used by the archive provider and by tests; every pull succeeds.
    pub fn from_batches(batches: Vec<LocationBatch>) -> Self {
        Self {
            stream: stream::iter(batches.into_iter().map(Ok)).boxed(),
        }
    }

    /// Consumes the segment, yielding its underlying stream
    pub fn into_stream(self) -> BatchStream {
        self.stream
    }
}

impl std::fmt::Debug for RouteSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteSegment").finish_non_exhaustive()
    }
}
