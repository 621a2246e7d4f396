//! Per-workout export orchestrator
//!
//! Fetches a workout's heart-rate snapshot and route-segment streams from
//! the provider concurrently, then drives the GPX document builder against
//! a fresh file. On any failure or cancellation the partially written file
//! is deleted before the error propagates; the caller only ever receives a
//! handle to a complete document.

use crate::adapters::provider::HealthDataProvider;
use crate::core::export::file::ExportedFile;
use crate::core::gpx::{write_document, GpxWriter};
use crate::domain::{GpxportError, Result, RouteSegment, Workout};
use futures::StreamExt;
use std::path::Path;
use tokio::sync::watch;

/// Exports one workout to a GPX file under `output_dir`
///
/// Cancellation is cooperative: the `cancel` signal is observed before the
/// provider fetches and between every batch pull while writing. A cancelled
/// export returns [`GpxportError::Cancelled`] after deleting its partial
/// file and releasing the writer.
///
/// # Errors
///
/// Provider query errors, route-stream errors, and I/O errors abort this
/// workout's export; none of them leave a file behind.
pub async fn export_workout(
    provider: &dyn HealthDataProvider,
    workout: &Workout,
    output_dir: &Path,
    cancel: watch::Receiver<bool>,
) -> Result<ExportedFile> {
    check_cancelled(&cancel)?;

    tracing::debug!(workout_id = %workout.id, "Fetching workout data");

    let (heart_rate, segments) = tokio::try_join!(
        provider.query_heart_rate(workout),
        provider.query_route_segments(workout),
    )?;

    check_cancelled(&cancel)?;

    let path = output_dir.join(workout.export_file_name());
    tracing::debug!(
        workout_id = %workout.id,
        path = %path.display(),
        heart_rate_samples = heart_rate.len(),
        segments = segments.len(),
        "Writing GPX document"
    );

    // Created before the writer so its Drop (file deletion) runs after the
    // writer has released the handle on every unwind path.
    let file = ExportedFile::new(path.clone());
    let mut writer = GpxWriter::create(&path)?;

    let segments = with_cancellation(segments, &cancel);
    write_document(&mut writer, workout, segments, heart_rate).await?;
    writer.close()?;

    tracing::debug!(workout_id = %workout.id, "GPX document written");

    Ok(file)
}

fn check_cancelled(cancel: &watch::Receiver<bool>) -> Result<()> {
    if *cancel.borrow() {
        Err(GpxportError::Cancelled)
    } else {
        Ok(())
    }
}

/// Wraps each segment stream so every batch pull observes the cancel signal
fn with_cancellation(
    segments: Vec<RouteSegment>,
    cancel: &watch::Receiver<bool>,
) -> Vec<RouteSegment> {
    segments
        .into_iter()
        .map(|segment| {
            let cancel = cancel.clone();
            RouteSegment::new(
                segment
                    .into_stream()
                    .map(move |item| {
                        if *cancel.borrow() {
                            Err(GpxportError::Cancelled)
                        } else {
                            item
                        }
                    })
                    .boxed(),
            )
        })
        .collect()
}
