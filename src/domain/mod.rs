//! Domain models and types for gpxport.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`WorkoutId`])
//! - **Domain models** ([`Workout`], [`HeartRateSample`], [`LocationPoint`], [`RouteSegment`])
//! - **Error types** ([`GpxportError`], [`ProviderError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`]:
//!
//! ```rust
//! use gpxport::domain::{GpxportError, Result};
//!
//! fn example() -> Result<()> {
//!     let config = gpxport::config::load_config("gpxport.toml")?;
//!     Ok(())
//! }
//! ```

pub mod activity;
pub mod errors;
pub mod ids;
pub mod result;
pub mod samples;
pub mod workout;

// Re-export commonly used types for convenience
pub use activity::{ActivityType, SUPPORTED_ACTIVITIES};
pub use errors::{GpxportError, ProviderError};
pub use ids::WorkoutId;
pub use result::Result;
pub use samples::{BatchStream, HeartRateSample, LocationBatch, LocationPoint, RouteSegment};
pub use workout::Workout;
