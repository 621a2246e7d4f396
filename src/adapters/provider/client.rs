//! Provider factory
//!
//! Selects the concrete [`HealthDataProvider`] implementation from
//! configuration. Only the archive backend exists today; the factory keeps
//! the selection logic out of the export pipeline so further backends slot
//! in behind the same trait.

use crate::adapters::provider::archive::ArchiveProvider;
use crate::adapters::provider::traits::HealthDataProvider;
use crate::config::ProviderConfig;
use crate::domain::{GpxportError, Result};
use std::sync::Arc;

/// High-level handle to the configured health-data provider
pub struct ProviderClient {
    provider: Arc<dyn HealthDataProvider>,
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient").finish_non_exhaustive()
    }
}

impl ProviderClient {
    /// Creates the provider named by `config.kind`
    ///
    /// # Errors
    ///
    /// Returns a configuration error for unknown provider kinds.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let kind = config.kind.to_lowercase();

        let provider: Arc<dyn HealthDataProvider> = match kind.as_str() {
            "archive" => Arc::new(ArchiveProvider::new(config.archive_path.clone())),
            _ => {
                return Err(GpxportError::Configuration(format!(
                    "Unsupported provider kind: {kind}. Supported kinds: archive"
                )))
            }
        };

        Ok(Self { provider })
    }

    /// Shared handle to the underlying provider
    pub fn provider(&self) -> Arc<dyn HealthDataProvider> {
        self.provider.clone()
    }
}
