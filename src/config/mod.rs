//! Configuration management
//!
//! TOML-backed configuration with `${VAR}` substitution and `GPXPORT_*`
//! environment overrides.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{
    ApplicationConfig, ExportConfig, GpxportConfig, LoggingConfig, ProviderConfig,
};
