//! Result type alias for gpxport operations

use crate::domain::errors::GpxportError;

/// Convenience alias used by every fallible operation in the crate
pub type Result<T> = std::result::Result<T, GpxportError>;
