//! Validate config command implementation

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("Validating configuration file: {config_path}");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("Configuration is invalid");
                println!("  Error: {e}");
                return Ok(2);
            }
        };

        println!("Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Application: {}", config.application.name);
        println!("  Provider: {}", config.provider.kind);
        println!("  Archive path: {}", config.provider.archive_path);
        println!(
            "  Output directory: {}",
            config.export.resolved_output_dir().display()
        );
        if config.export.activity_filter.is_empty() {
            println!("  Activity filter: all supported activities");
        } else {
            println!(
                "  Activity filter: {}",
                config.export.activity_filter.join(", ")
            );
        }
        println!("  Log level: {}", config.logging.level);

        Ok(0)
    }
}
