//! Archive-backed health-data provider
//!
//! Reads workout dumps from a directory on disk:
//!
//! ```text
//! <root>/
//!   workouts.json          index of all workouts
//!   samples/<id>.json      per-workout heart-rate and route samples
//! ```
//!
//! The per-workout file holds the heart-rate snapshot plus the route as
//! segments of batches, mirroring how streaming providers deliver location
//! data. A missing samples file means the workout simply recorded no
//! samples; that still exports as a valid (route-less) GPX document.

use crate::adapters::provider::traits::HealthDataProvider;
use crate::domain::{
    ActivityType, HeartRateSample, LocationBatch, ProviderError, Result, RouteSegment, Workout,
    SUPPORTED_ACTIVITIES,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

const INDEX_FILE: &str = "workouts.json";
const SAMPLES_DIR: &str = "samples";

/// Per-workout sample dump
#[derive(Debug, Default, Serialize, Deserialize)]
struct WorkoutSamples {
    /// Heart-rate measurements, not necessarily sorted on disk
    #[serde(default)]
    heart_rate: Vec<HeartRateSample>,

    /// Route segments, each a list of location batches
    #[serde(default)]
    route: Vec<Vec<LocationBatch>>,
}

/// Health-data provider reading JSON dumps from a directory
pub struct ArchiveProvider {
    root: PathBuf,
}

impl ArchiveProvider {
    /// Creates a provider over the archive at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Archive root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn samples_path(&self, workout: &Workout) -> PathBuf {
        self.root
            .join(SAMPLES_DIR)
            .join(format!("{}.json", workout.id))
    }

    async fn read_samples(&self, workout: &Workout) -> Result<WorkoutSamples> {
        let path = self.samples_path(workout);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(
                    workout_id = %workout.id,
                    "No samples file, treating workout as sample-less"
                );
                return Ok(WorkoutSamples::default());
            }
            Err(e) => {
                return Err(ProviderError::QueryFailed(format!(
                    "Failed to read {}: {e}",
                    path.display()
                ))
                .into())
            }
        };

        serde_json::from_slice(&bytes).map_err(|e| {
            ProviderError::InvalidData(format!("Malformed samples file {}: {e}", path.display()))
                .into()
        })
    }
}

#[async_trait]
impl HealthDataProvider for ArchiveProvider {
    async fn request_authorization(&self) -> Result<()> {
        tracing::debug!(root = %self.root.display(), "Checking archive access");

        match tokio::fs::metadata(&self.root).await {
            Ok(meta) if meta.is_dir() => Ok(()),
            Ok(_) => Err(ProviderError::Unavailable(format!(
                "{} is not a directory",
                self.root.display()
            ))
            .into()),
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                Err(ProviderError::AuthorizationDenied(format!(
                    "Access to {} denied: {e}",
                    self.root.display()
                ))
                .into())
            }
            Err(e) => Err(ProviderError::Unavailable(format!(
                "Archive {} not accessible: {e}",
                self.root.display()
            ))
            .into()),
        }
    }

    async fn list_workouts(&self, filter: &[ActivityType]) -> Result<Vec<Workout>> {
        let path = self.root.join(INDEX_FILE);
        tracing::debug!(path = %path.display(), "Loading workout index");

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            ProviderError::QueryFailed(format!("Failed to read {}: {e}", path.display()))
        })?;
        let mut workouts: Vec<Workout> = serde_json::from_slice(&bytes).map_err(|e| {
            ProviderError::InvalidData(format!("Malformed workout index: {e}"))
        })?;

        let filter: &[ActivityType] = if filter.is_empty() {
            SUPPORTED_ACTIVITIES
        } else {
            filter
        };
        workouts.retain(|w| filter.contains(&w.activity));

        // Most recent first, like the platform's own workout list.
        workouts.sort_by(|a, b| b.end.cmp(&a.end));

        tracing::debug!(count = workouts.len(), "Loaded workouts from archive");
        Ok(workouts)
    }

    async fn query_heart_rate(&self, workout: &Workout) -> Result<Vec<HeartRateSample>> {
        let mut samples = self.read_samples(workout).await?.heart_rate;

        // The trait guarantees an ascending snapshot restricted to the
        // workout window; the archive file carries no such guarantee, so
        // enforce it here.
        samples.retain(|s| s.timestamp >= workout.start && s.timestamp <= workout.end);
        samples.sort_by_key(|s| s.timestamp);

        Ok(samples)
    }

    async fn query_route_segments(&self, workout: &Workout) -> Result<Vec<RouteSegment>> {
        let route = self.read_samples(workout).await?.route;
        Ok(route.into_iter().map(RouteSegment::from_batches).collect())
    }
}
