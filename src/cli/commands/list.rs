//! List command implementation
//!
//! Prints the workouts the configured provider knows about, most recent
//! first, with the file name each would export to.

use crate::adapters::provider::ProviderClient;
use crate::cli::commands::exit_code_for;
use crate::config::load_config;
use crate::domain::ActivityType;
use clap::Args;

/// Arguments for the list command
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Override activity filter (comma-separated, e.g. "running,cycling")
    #[arg(long)]
    pub activity: Option<String>,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(2);
            }
        };

        if let Some(activity) = &self.activity {
            config.export.activity_filter =
                activity.split(',').map(|s| s.trim().to_string()).collect();
        }

        let activities: Vec<ActivityType> = match config.export.activities() {
            Ok(a) => a,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(2);
            }
        };

        let client = match ProviderClient::new(&config.provider) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(2);
            }
        };
        let provider = client.provider();

        if let Err(e) = provider.request_authorization().await {
            eprintln!("Error: {e}");
            return Ok(3);
        }

        let workouts = match provider.list_workouts(&activities).await {
            Ok(w) => w,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if workouts.is_empty() {
            println!("No workouts found");
            return Ok(0);
        }

        println!("{} workout(s):", workouts.len());
        for workout in &workouts {
            let minutes = workout.duration().num_minutes();
            let distance = workout
                .distance_meters
                .map(|m| format!("{:.1} km", m / 1000.0))
                .unwrap_or_else(|| "-".to_string());
            println!(
                "  {:<24} {:<22} {:>4} min  {:>9}  [{}]",
                workout.id.as_str(),
                workout.track_name(),
                minutes,
                distance,
                workout.export_file_name()
            );
        }

        Ok(0)
    }
}
