//! Heart-rate / location merge engine
//!
//! Joins an ascending-sorted heart-rate snapshot against the time-ordered
//! location stream of a workout. For every location timestamp the engine
//! reports the BPM of the latest heart-rate sample taken strictly before
//! that timestamp, or nothing if no sample qualifies yet.
//!
//! The cursor only ever moves forward, so a full workout costs O(H + L)
//! regardless of how the locations are split into batches and segments.
//! That single-pass property is exactly why both inputs must already be
//! time-ordered; the engine never re-sorts or rewinds.

use crate::domain::HeartRateSample;
use chrono::{DateTime, Utc};

/// Forward-scan cursor over one workout's heart-rate samples
///
/// Owned exclusively by one in-progress document build and discarded when
/// the build finishes.
#[derive(Debug)]
pub struct HeartRateCursor {
    samples: Vec<HeartRateSample>,
    /// Index of the first not-yet-consumed sample
    position: usize,
    /// BPM of the most recently consumed sample
    last_bpm: Option<f64>,
}

impl HeartRateCursor {
    /// Creates a cursor over an ascending-sorted sample array
    ///
    /// Ordering is guaranteed by the provider query and is not re-validated
    /// here.
    pub fn new(samples: Vec<HeartRateSample>) -> Self {
        Self {
            samples,
            position: 0,
            last_bpm: None,
        }
    }

    /// Returns the BPM applicable to a location recorded at `timestamp`
    ///
    /// Advances past every sample taken strictly before `timestamp` and
    /// returns the last one consumed so far. A sample exactly coincident
    /// with `timestamp` is left for the next call; this strict-`<`
    /// tie-break is fixed for output compatibility.
    ///
    /// Callers must feed timestamps in non-decreasing order; the cursor
    /// never rewinds.
    pub fn bpm_before(&mut self, timestamp: DateTime<Utc>) -> Option<f64> {
        while let Some(sample) = self.samples.get(self.position) {
            if sample.timestamp >= timestamp {
                break;
            }
            self.last_bpm = Some(sample.bpm);
            self.position += 1;
        }
        self.last_bpm
    }

    /// Index of the first unconsumed sample
    ///
    /// Monotonically non-decreasing across calls; exposed so callers and
    /// tests can assert the single-forward-pass property.
    pub fn position(&self) -> usize {
        self.position
    }
}
