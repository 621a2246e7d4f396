//! # gpxport - Workout to GPX exporter
//!
//! gpxport exports fitness workout records to standard GPX 1.1 track
//! files, merging each workout's heart-rate samples into its GPS route as
//! Garmin TrackPointExtension elements.
//!
//! ## Architecture
//!
//! gpxport follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (merge engine, GPX builder, export pipeline)
//! - [`adapters`] - The health-data provider boundary
//! - [`domain`] - Core domain types and error taxonomy
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use gpxport::adapters::provider::ProviderClient;
//! use gpxport::config::load_config;
//! use gpxport::core::export::ExportCoordinator;
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("gpxport.toml")?;
//!
//!     let provider = ProviderClient::new(&config.provider)?.provider();
//!     provider.request_authorization().await?;
//!     let workouts = provider.list_workouts(&[]).await?;
//!
//!     let (_cancel_tx, cancel_rx) = watch::channel(false);
//!     let mut coordinator =
//!         ExportCoordinator::new(provider, config.export.resolved_output_dir());
//!     let outcome = coordinator.export_workouts(workouts, cancel_rx).await?;
//!
//!     for (workout, file) in outcome.files {
//!         println!("{} -> {}", workout.id, file.keep().display());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## The merge
//!
//! Heart rate and route arrive from the provider independently: the heart
//! rate as one sorted snapshot, the route as asynchronous batches grouped
//! into segments. The exporter joins them in a single forward pass: each
//! trackpoint carries the BPM of the latest sample recorded strictly
//! before it, so a whole workout costs O(samples + locations) no matter
//! how the route is batched.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
