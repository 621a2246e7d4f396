//! Batch export coordinator
//!
//! Fans one export task out per workout, aggregates completions into the
//! shared progress counter, and supports cooperative cancellation of the
//! whole batch. All mutable batch state (progress, collected files, failure
//! list) lives in this coordinator's task; child tasks report results back
//! through the join set instead of touching shared state, so no locks are
//! needed.

use crate::adapters::provider::HealthDataProvider;
use crate::core::export::outcome::{BatchOutcome, WorkoutFailure};
use crate::core::export::progress::ExportProgress;
use crate::core::export::workout::export_workout;
use crate::domain::{Result, Workout};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::watch;
use tokio::task::JoinSet;

/// Coordinates concurrent export of a set of workouts
///
/// At most one batch is in flight per coordinator: [`export_workouts`]
/// takes `&mut self`, so starting a second batch while one is running is
/// rejected at compile time. Progress for the current batch is published on
/// a watch channel; `None` means idle.
///
/// [`export_workouts`]: ExportCoordinator::export_workouts
pub struct ExportCoordinator {
    provider: Arc<dyn HealthDataProvider>,
    output_dir: PathBuf,
    progress_tx: watch::Sender<Option<ExportProgress>>,
}

impl ExportCoordinator {
    /// Creates a coordinator writing exported files under `output_dir`
    pub fn new(provider: Arc<dyn HealthDataProvider>, output_dir: PathBuf) -> Self {
        let (progress_tx, _) = watch::channel(None);
        Self {
            provider,
            output_dir,
            progress_tx,
        }
    }

    /// Live progress of the current batch; `None` while idle
    pub fn progress(&self) -> watch::Receiver<Option<ExportProgress>> {
        self.progress_tx.subscribe()
    }

    /// Exports every workout in `workouts` concurrently
    ///
    /// Each workout gets its own task; individual failures are recorded in
    /// the outcome without aborting siblings. When `cancel` flips to true
    /// the coordinator stops waiting for stragglers, aborts in-flight tasks
    /// (their partial files are deleted as the tasks unwind), discards any
    /// already-collected files, and returns a clean cancelled outcome.
    /// Progress is cleared on every exit path.
    ///
    /// # Errors
    ///
    /// Cancellation and per-workout failures are reported through the
    /// [`BatchOutcome`], never as an `Err`.
    pub async fn export_workouts(
        &mut self,
        workouts: Vec<Workout>,
        cancel: watch::Receiver<bool>,
    ) -> Result<BatchOutcome> {
        let start_time = Instant::now();
        let total = workouts.len();

        tracing::info!(total, "Starting export batch");

        let mut progress = ExportProgress::new(total);
        self.progress_tx.send_replace(Some(progress));

        let mut join_set = JoinSet::new();
        for workout in workouts {
            let provider = self.provider.clone();
            let output_dir = self.output_dir.clone();
            let task_cancel = cancel.clone();
            join_set.spawn(async move {
                let result =
                    export_workout(provider.as_ref(), &workout, &output_dir, task_cancel).await;
                (workout, result)
            });
        }

        let mut files = Vec::with_capacity(total);
        let mut failures = Vec::new();
        let mut cancelled = *cancel.borrow();
        let mut cancel_rx = cancel;
        let mut cancel_open = !cancelled;

        while !cancelled {
            tokio::select! {
                changed = cancel_rx.changed(), if cancel_open => {
                    match changed {
                        Ok(()) => cancelled = *cancel_rx.borrow(),
                        // Sender dropped without cancelling; stop polling it.
                        Err(_) => cancel_open = false,
                    }
                }
                joined = join_set.join_next() => {
                    let Some(joined) = joined else { break };
                    match joined {
                        Ok((workout, Ok(file))) => {
                            progress.advance();
                            self.progress_tx.send_replace(Some(progress));
                            tracing::info!(
                                workout_id = %workout.id,
                                progress = %progress,
                                path = %file.path().display(),
                                "Workout exported"
                            );
                            files.push((workout, file));
                        }
                        Ok((workout, Err(e))) if e.is_cancelled() => {
                            tracing::debug!(workout_id = %workout.id, "Workout export cancelled");
                            cancelled = true;
                        }
                        Ok((workout, Err(e))) => {
                            progress.advance();
                            self.progress_tx.send_replace(Some(progress));
                            tracing::warn!(
                                workout_id = %workout.id,
                                error = %e,
                                "Workout export failed, continuing with remaining workouts"
                            );
                            failures.push(WorkoutFailure {
                                workout_id: workout.id,
                                message: e.to_string(),
                            });
                        }
                        Err(join_err) => {
                            progress.advance();
                            self.progress_tx.send_replace(Some(progress));
                            tracing::error!(error = %join_err, "Export task panicked");
                            failures.push(WorkoutFailure {
                                workout_id: crate::domain::WorkoutId::new("unknown")
                                    .expect("static id is non-empty"),
                                message: format!("Export task panicked: {join_err}"),
                            });
                        }
                    }
                }
            }
        }

        let outcome = if cancelled {
            tracing::info!("Cancelling export batch, stopping in-flight workouts");
            // Aborted tasks unwind through their ExportedFile guards, so
            // partial files are deleted before shutdown returns.
            join_set.shutdown().await;
            // Already-collected files are discarded the same way.
            drop(files);
            BatchOutcome::cancelled(start_time.elapsed())
        } else {
            BatchOutcome::completed(files, failures, start_time.elapsed())
        };

        self.progress_tx.send_replace(None);
        outcome.log_summary();

        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::export::outcome::BatchStatus;
    use crate::domain::{
        ActivityType, HeartRateSample, LocationPoint, ProviderError, RouteSegment, WorkoutId,
    };
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use std::collections::HashSet;

    /// Provider with a configurable set of workout ids that fail
    struct TestProvider {
        failing: HashSet<String>,
    }

    #[async_trait]
    impl HealthDataProvider for TestProvider {
        async fn request_authorization(&self) -> Result<()> {
            Ok(())
        }

        async fn list_workouts(&self, _filter: &[ActivityType]) -> Result<Vec<Workout>> {
            Ok(Vec::new())
        }

        async fn query_heart_rate(&self, _workout: &Workout) -> Result<Vec<HeartRateSample>> {
            Ok(Vec::new())
        }

        async fn query_route_segments(&self, workout: &Workout) -> Result<Vec<RouteSegment>> {
            if self.failing.contains(workout.id.as_str()) {
                return Err(ProviderError::QueryFailed("no route".to_string()).into());
            }
            let ts = workout.start;
            Ok(vec![RouteSegment::from_batches(vec![vec![LocationPoint {
                latitude: 1.0,
                longitude: 2.0,
                altitude: 3.0,
                timestamp: ts,
            }]])])
        }
    }

    fn workout(id: &str, minute: u32) -> Workout {
        Workout {
            id: WorkoutId::new(id).unwrap(),
            activity: ActivityType::Running,
            start: Utc.with_ymd_and_hms(2022, 2, 3, 9, minute, 0).unwrap(),
            end: Utc.with_ymd_and_hms(2022, 2, 3, 10, minute, 0).unwrap(),
            distance_meters: None,
        }
    }

    #[tokio::test]
    async fn test_batch_exports_all_workouts() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(TestProvider {
            failing: HashSet::new(),
        });
        let mut coordinator = ExportCoordinator::new(provider, dir.path().to_path_buf());
        let progress_rx = coordinator.progress();
        let (_tx, cancel) = watch::channel(false);

        let workouts = vec![workout("a", 1), workout("b", 2), workout("c", 3)];
        let outcome = coordinator
            .export_workouts(workouts, cancel)
            .await
            .unwrap();

        assert!(outcome.is_success());
        assert_eq!(outcome.files.len(), 3);
        // Progress cleared after the batch.
        assert!(progress_rx.borrow().is_none());
    }

    #[tokio::test]
    async fn test_individual_failure_does_not_abort_siblings() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(TestProvider {
            failing: ["b".to_string()].into_iter().collect(),
        });
        let mut coordinator = ExportCoordinator::new(provider, dir.path().to_path_buf());
        let (_tx, cancel) = watch::channel(false);

        let workouts = vec![workout("a", 1), workout("b", 2), workout("c", 3)];
        let outcome = coordinator
            .export_workouts(workouts, cancel)
            .await
            .unwrap();

        assert_eq!(outcome.status, BatchStatus::Completed);
        assert_eq!(outcome.files.len(), 2);
        assert_eq!(outcome.failures.len(), 1);
        assert_eq!(outcome.failures[0].workout_id.as_str(), "b");
    }

    #[tokio::test]
    async fn test_cancelled_before_start_yields_clean_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(TestProvider {
            failing: HashSet::new(),
        });
        let mut coordinator = ExportCoordinator::new(provider, dir.path().to_path_buf());
        let progress_rx = coordinator.progress();
        let (tx, cancel) = watch::channel(false);
        tx.send(true).unwrap();

        let outcome = coordinator
            .export_workouts(vec![workout("a", 1)], cancel)
            .await
            .unwrap();

        assert_eq!(outcome.status, BatchStatus::Cancelled);
        assert!(outcome.files.is_empty());
        assert!(progress_rx.borrow().is_none());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn test_empty_batch_completes_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(TestProvider {
            failing: HashSet::new(),
        });
        let mut coordinator = ExportCoordinator::new(provider, dir.path().to_path_buf());
        let (_tx, cancel) = watch::channel(false);

        let outcome = coordinator.export_workouts(Vec::new(), cancel).await.unwrap();
        assert!(outcome.is_success());
        assert!(outcome.files.is_empty());
    }

    #[tokio::test]
    async fn test_progress_cleared_after_partial_failure() {
        let dir = tempfile::tempdir().unwrap();
        let provider = Arc::new(TestProvider {
            failing: ["b".to_string()].into_iter().collect(),
        });
        let mut coordinator = ExportCoordinator::new(provider, dir.path().to_path_buf());
        let progress_rx = coordinator.progress();
        let (_tx, cancel) = watch::channel(false);

        let workouts = vec![workout("a", 1), workout("b", 2)];
        let outcome = coordinator
            .export_workouts(workouts, cancel)
            .await
            .unwrap();

        // Failure still advances the counter and progress is cleared at the
        // end regardless of individual failures.
        assert_eq!(outcome.failures.len(), 1);
        assert!(progress_rx.borrow().is_none());
    }
}
