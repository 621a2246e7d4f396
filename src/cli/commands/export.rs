//! Export command implementation
//!
//! Authorizes against the provider, lists matching workouts, runs the batch
//! export coordinator, and claims the resulting files so they survive the
//! process. Ctrl+C cancels the batch cooperatively; a cancelled export is a
//! clean exit, not an error.

use crate::adapters::provider::ProviderClient;
use crate::cli::commands::exit_code_for;
use crate::config::load_config;
use crate::core::export::{BatchStatus, ExportCoordinator};
use crate::domain::{ActivityType, Workout, WorkoutId};
use clap::Args;
use std::str::FromStr;
use tokio::sync::watch;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Override activity filter (comma-separated, e.g. "running,cycling")
    #[arg(long)]
    pub activity: Option<String>,

    /// Export only these workout IDs (comma-separated)
    #[arg(long)]
    pub workout_id: Option<String>,

    /// Override output directory for exported files
    #[arg(long)]
    pub output_dir: Option<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(
        &self,
        config_path: &str,
        shutdown_signal: watch::Receiver<bool>,
    ) -> anyhow::Result<i32> {
        tracing::info!("Starting export command");

        let mut config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                return Ok(2);
            }
        };

        // Apply CLI overrides
        if let Some(activity) = &self.activity {
            let entries: Vec<String> = activity
                .split(',')
                .map(|s| s.trim().to_string())
                .collect();
            tracing::info!(activity = ?entries, "Overriding activity filter from CLI");
            config.export.activity_filter = entries;
        }
        if let Some(dir) = &self.output_dir {
            config.export.output_dir = Some(dir.clone());
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
            tracing::error!(error = %e, "Provider authorization failed");
            eprintln!("Error: {e}");
            return Ok(3);
        }

        let mut workouts = match provider.list_workouts(&activities).await {
            Ok(w) => w,
            Err(e) => {
                tracing::error!(error = %e, "Failed to list workouts");
                eprintln!("Error: {e}");
                return Ok(exit_code_for(&e));
            }
        };

        if let Some(ids) = &self.workout_id {
            let wanted: Vec<WorkoutId> = ids
                .split(',')
                .filter_map(|s| WorkoutId::from_str(s.trim()).ok())
                .collect();
            workouts.retain(|w: &Workout| wanted.contains(&w.id));
        }

        if workouts.is_empty() {
            tracing::info!("No workouts match the requested filters");
            println!("No workouts to export");
            return Ok(0);
        }

        println!("Exporting {} workout(s)...", workouts.len());

        let output_dir = config.export.resolved_output_dir();
        if let Err(e) = std::fs::create_dir_all(&output_dir) {
            eprintln!("Error: cannot create output directory: {e}");
            return Ok(5);
        }

        let mut coordinator = ExportCoordinator::new(provider, output_dir);
        let outcome = coordinator
            .export_workouts(workouts, shutdown_signal)
            .await?;

        match outcome.status {
            BatchStatus::Cancelled => {
                println!("Export cancelled");
                Ok(0)
            }
            BatchStatus::Completed => {
                for (workout, file) in outcome.files {
                    let path = file.keep();
                    println!("{} -> {}", workout.id, path.display());
                }
                if outcome.failures.is_empty() {
                    Ok(0)
                } else {
                    for failure in &outcome.failures {
                        eprintln!("Failed: {} ({})", failure.workout_id, failure.message);
                    }
                    Ok(1)
                }
            }
        }
    }
}
