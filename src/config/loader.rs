//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::GpxportConfig;
use crate::domain::errors::GpxportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`GpxportConfig`]
/// 4. Applies environment variable overrides (`GPXPORT_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is not set
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use gpxport::config::load_config;
///
/// let config = load_config("gpxport.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<GpxportConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(GpxportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        GpxportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: GpxportConfig = toml::from_str(&contents)
        .map_err(|e| GpxportError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        GpxportError::Configuration(format!("Configuration validation failed: {e}"))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("static regex is valid");
    let mut missing_vars = Vec::new();

    let result = re.replace_all(input, |caps: &regex::Captures<'_>| {
        let var_name = &caps[1];
        match std::env::var(var_name) {
            Ok(value) => value,
            Err(_) => {
                missing_vars.push(var_name.to_string());
                String::new()
            }
        }
    });

    if missing_vars.is_empty() {
        Ok(result.into_owned())
    } else {
        Err(GpxportError::Configuration(format!(
            "Missing environment variables referenced in configuration: {}",
            missing_vars.join(", ")
        )))
    }
}

/// Applies `GPXPORT_*` environment variable overrides
///
/// Recognized variables:
/// - `GPXPORT_PROVIDER_KIND`
/// - `GPXPORT_ARCHIVE_PATH`
/// - `GPXPORT_OUTPUT_DIR`
/// - `GPXPORT_LOG_LEVEL`
fn apply_env_overrides(config: &mut GpxportConfig) {
    if let Ok(kind) = std::env::var("GPXPORT_PROVIDER_KIND") {
        tracing::debug!(kind = %kind, "Overriding provider.kind from environment");
        config.provider.kind = kind;
    }
    if let Ok(path) = std::env::var("GPXPORT_ARCHIVE_PATH") {
        tracing::debug!(path = %path, "Overriding provider.archive_path from environment");
        config.provider.archive_path = path;
    }
    if let Ok(dir) = std::env::var("GPXPORT_OUTPUT_DIR") {
        tracing::debug!(dir = %dir, "Overriding export.output_dir from environment");
        config.export.output_dir = Some(dir);
    }
    if let Ok(level) = std::env::var("GPXPORT_LOG_LEVEL") {
        config.logging.level = level;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let file = write_config(
            r#"
            [provider]
            kind = "archive"
            archive_path = "/data/health"

            [export]
            activity_filter = ["running"]
            "#,
        );
        let config = load_config(file.path()).unwrap();
        assert_eq!(config.provider.archive_path, "/data/health");
        assert_eq!(config.export.activity_filter, vec!["running"]);
    }

    #[test]
    fn test_missing_file_fails() {
        let err = load_config("/no/such/gpxport.toml").unwrap_err();
        assert!(matches!(err, GpxportError::Configuration(_)));
    }

    #[test]
    fn test_invalid_config_fails_validation() {
        let file = write_config(
            r#"
            [provider]
            kind = "archive"
            archive_path = ""
            "#,
        );
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_env_substitution() {
        std::env::set_var("GPXPORT_TEST_ARCHIVE", "/from/env");
        let substituted =
            substitute_env_vars("archive_path = \"${GPXPORT_TEST_ARCHIVE}\"").unwrap();
        assert_eq!(substituted, "archive_path = \"/from/env\"");
        std::env::remove_var("GPXPORT_TEST_ARCHIVE");
    }

    #[test]
    fn test_env_substitution_missing_var_fails() {
        let err = substitute_env_vars("path = \"${GPXPORT_DEFINITELY_UNSET_VAR}\"").unwrap_err();
        assert!(err
            .to_string()
            .contains("GPXPORT_DEFINITELY_UNSET_VAR"));
    }
}
