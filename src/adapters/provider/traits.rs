//! Health-data provider abstraction
//!
//! This trait is the boundary to the platform that captured the workouts.
//! gpxport consumes it and nothing else: authorization, workout listing,
//! and the per-workout sample queries all go through here, so backends can
//! be swapped without touching the export pipeline.

use crate::domain::{ActivityType, HeartRateSample, Result, RouteSegment, Workout};
use async_trait::async_trait;

/// Read-only access to a health-data store
#[async_trait]
pub trait HealthDataProvider: Send + Sync {
    /// Requests read access to the store
    ///
    /// Must be called before any query. Failure is fatal to the whole
    /// operation; there is no retry.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::AuthorizationDenied`] or
    /// [`ProviderError::Unavailable`] when access cannot be granted.
    ///
    /// [`ProviderError::AuthorizationDenied`]: crate::domain::ProviderError::AuthorizationDenied
    /// [`ProviderError::Unavailable`]: crate::domain::ProviderError::Unavailable
    async fn request_authorization(&self) -> Result<()>;

    /// Lists workouts matching `filter`, most recent first
    ///
    /// An empty filter means "all supported activity types".
    ///
    /// # Errors
    ///
    /// Returns a provider error if the listing query fails.
    async fn list_workouts(&self, filter: &[ActivityType]) -> Result<Vec<Workout>>;

    /// Returns the workout's heart-rate samples, ascending by timestamp
    ///
    /// The ordering guarantee is part of this contract; the merge engine
    /// relies on it without re-validating.
    ///
    /// # Errors
    ///
    /// Returns a provider error if the query fails.
    async fn query_heart_rate(&self, workout: &Workout) -> Result<Vec<HeartRateSample>>;

    /// Returns the workout's route segments in provider order
    ///
    /// Each segment is a lazily-pulled stream of location batches; any pull
    /// may fail, not just the first.
    ///
    /// # Errors
    ///
    /// Returns a provider error if the segment listing fails.
    async fn query_route_segments(&self, workout: &Workout) -> Result<Vec<RouteSegment>>;
}
