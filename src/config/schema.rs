//! Configuration schema types
//!
//! Defines the structure of `gpxport.toml`. Every section validates itself;
//! the loader runs all validations after parsing and env overrides.

use crate::domain::ActivityType;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

/// Main gpxport configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GpxportConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Health-data provider configuration
    pub provider: ProviderConfig,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GpxportConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.provider.validate()?;
        self.export.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Name used as the logging identity
    #[serde(default = "default_app_name")]
    pub name: String,
}

fn default_app_name() -> String {
    "gpxport".to_string()
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("application.name cannot be empty".to_string());
        }
        Ok(())
    }
}

/// Health-data provider selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider backend ("archive")
    #[serde(default = "default_provider_kind")]
    pub kind: String,

    /// Root directory of the workout archive (archive provider)
    #[serde(default)]
    pub archive_path: String,
}

fn default_provider_kind() -> String {
    "archive".to_string()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            archive_path: String::new(),
        }
    }
}

impl ProviderConfig {
    fn validate(&self) -> Result<(), String> {
        match self.kind.to_lowercase().as_str() {
            "archive" => {
                if self.archive_path.trim().is_empty() {
                    return Err(
                        "provider.archive_path is required for the archive provider".to_string()
                    );
                }
                Ok(())
            }
            other => Err(format!(
                "Unsupported provider.kind: {other}. Supported kinds: archive"
            )),
        }
    }
}

/// Export settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory for exported GPX files; defaults to the system temp dir
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<String>,

    /// Activity types to export; empty means all supported types
    #[serde(default)]
    pub activity_filter: Vec<String>,
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        for entry in &self.activity_filter {
            ActivityType::from_str(entry)
                .map_err(|e| format!("Invalid export.activity_filter entry: {e}"))?;
        }
        Ok(())
    }

    /// Directory exported files are written to
    pub fn resolved_output_dir(&self) -> PathBuf {
        match &self.output_dir {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => std::env::temp_dir(),
        }
    }

    /// Parsed activity filter
    ///
    /// # Errors
    ///
    /// Returns an error if an entry is not a known activity type; callers
    /// normally run [`GpxportConfig::validate`] first, which catches this.
    pub fn activities(&self) -> Result<Vec<ActivityType>, String> {
        self.activity_filter
            .iter()
            .map(|s| ActivityType::from_str(s))
            .collect()
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable JSON logging to rotating local files
    #[serde(default)]
    pub local_enabled: bool,

    /// Directory for local log files
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Rotation policy ("daily" or "hourly")
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => return Err(format!("Invalid logging.level: {other}")),
        }
        match self.local_rotation.as_str() {
            "daily" | "hourly" => {}
            other => return Err(format!("Invalid logging.local_rotation: {other}")),
        }
        Ok(())
    }
}
