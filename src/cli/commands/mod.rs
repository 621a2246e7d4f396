//! CLI command implementations
//!
//! Every command returns a process exit code: 0 success or clean
//! cancellation, 1 partial failure, 2 configuration error, 3 authorization
//! error, 5 fatal error.

pub mod export;
pub mod init;
pub mod list;
pub mod validate;

use crate::domain::{GpxportError, ProviderError};

/// Maps an error to the process exit code it should produce
pub fn exit_code_for(error: &GpxportError) -> i32 {
    match error {
        GpxportError::Cancelled => 0,
        GpxportError::Configuration(_) => 2,
        GpxportError::Provider(
            ProviderError::AuthorizationDenied(_) | ProviderError::Unavailable(_),
        ) => 3,
        _ => 5,
    }
}
