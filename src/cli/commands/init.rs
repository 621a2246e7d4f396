//! Init command implementation
//!
//! Generates a commented sample configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

const SAMPLE_CONFIG: &str = r#"# gpxport configuration

[application]
name = "gpxport"

[provider]
# Only the archive provider is supported: a directory of JSON workout dumps
# with a workouts.json index and per-workout samples/<id>.json files.
kind = "archive"
archive_path = "./health-archive"

[export]
# Directory for exported GPX files. Defaults to the system temp directory;
# files written there are deleted unless the export completes successfully.
# output_dir = "./exports"

# Activity types to export. Empty means every supported activity.
# activity_filter = ["running", "cycling", "hiking"]

[logging]
level = "info"
# Write JSON logs to rotating files in addition to the console.
local_enabled = false
local_path = "logs"
local_rotation = "daily"
"#;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "gpxport.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        if Path::new(&self.output).exists() && !self.force {
            println!("Configuration file already exists: {}", self.output);
            println!("Use --force to overwrite");
            return Ok(2);
        }

        match fs::write(&self.output, SAMPLE_CONFIG) {
            Ok(()) => {
                println!("Wrote sample configuration to {}", self.output);
                println!("Edit provider.archive_path, then run: gpxport list");
                Ok(0)
            }
            Err(e) => {
                eprintln!("Error: failed to write {}: {e}", self.output);
                Ok(5)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_config_is_valid_toml() {
        let config: crate::config::GpxportConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.provider.kind, "archive");
    }
}
