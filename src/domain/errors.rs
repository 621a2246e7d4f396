//! Domain error types
//!
//! This module defines the error hierarchy for gpxport. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main gpxport error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum GpxportError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Health-data provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Export process errors
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors (file open/write/flush)
    #[error("I/O error: {0}")]
    Io(String),

    /// Cooperative cancellation
    ///
    /// This is a clean termination path, not a failure: it is never logged
    /// at error level and never surfaced to the user as an error.
    #[error("Operation cancelled")]
    Cancelled,

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

impl GpxportError {
    /// Returns `true` if this error represents cooperative cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, GpxportError::Cancelled)
    }
}

/// Health-data provider errors
///
/// Errors that occur when interacting with the workout data provider.
/// These errors don't expose the provider's backing-store types.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Access to the health-data store was denied
    #[error("Authorization denied: {0}")]
    AuthorizationDenied(String),

    /// The health-data store is not available
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// A provider query failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// A route-segment stream failed mid-pull
    #[error("Route stream failed: {0}")]
    RouteStreamFailed(String),

    /// Requested workout does not exist
    #[error("Workout not found: {0}")]
    WorkoutNotFound(String),

    /// The provider returned data that violates its contract
    #[error("Invalid provider data: {0}")]
    InvalidData(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for GpxportError {
    fn from(err: std::io::Error) -> Self {
        GpxportError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for GpxportError {
    fn from(err: serde_json::Error) -> Self {
        GpxportError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for GpxportError {
    fn from(err: toml::de::Error) -> Self {
        GpxportError::Configuration(format!("TOML parse error: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpxport_error_display() {
        let err = GpxportError::Configuration("Invalid config".to_string());
        assert_eq!(err.to_string(), "Configuration error: Invalid config");
    }

    #[test]
    fn test_provider_error_conversion() {
        let provider_err = ProviderError::QueryFailed("no index".to_string());
        let err: GpxportError = provider_err.into();
        assert!(matches!(err, GpxportError::Provider(_)));
    }

    #[test]
    fn test_cancelled_is_not_a_failure() {
        assert!(GpxportError::Cancelled.is_cancelled());
        assert!(!GpxportError::Export("boom".to_string()).is_cancelled());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let err: GpxportError = io_err.into();
        assert!(matches!(err, GpxportError::Io(_)));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: GpxportError = json_err.into();
        assert!(matches!(err, GpxportError::Serialization(_)));
    }

    #[test]
    fn test_toml_error_conversion() {
        let toml_err = toml::from_str::<toml::Value>("invalid = toml = syntax").unwrap_err();
        let err: GpxportError = toml_err.into();
        assert!(matches!(err, GpxportError::Configuration(_)));
        assert!(err.to_string().contains("TOML parse error"));
    }

    #[test]
    fn test_errors_implement_std_error() {
        let err = GpxportError::Export("Test error".to_string());
        let _: &dyn std::error::Error = &err;
        let err = ProviderError::Unavailable("Test error".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
