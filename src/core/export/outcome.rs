//! Batch export outcome reporting
//!
//! The coordinator's summary of one batch: which workouts produced files,
//! which failed, and whether the batch ran to completion or was cancelled.
//! Individual failures never abort siblings (partial-success policy), so
//! the outcome carries a per-workout error list for the caller to surface.

use crate::core::export::file::ExportedFile;
use crate::domain::{Workout, WorkoutId};
use std::time::Duration;

/// How a batch ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchStatus {
    /// All workouts finished (some may have failed individually)
    Completed,
    /// The batch was cancelled cooperatively; not an error
    Cancelled,
}

/// One workout's export failure
#[derive(Debug, Clone)]
pub struct WorkoutFailure {
    /// Workout that failed to export
    pub workout_id: WorkoutId,

    /// Error message
    pub message: String,
}

/// Result of one export batch
#[derive(Debug)]
pub struct BatchOutcome {
    /// Terminal state of the batch
    pub status: BatchStatus,

    /// Successfully exported files, ownership transferred to the caller
    pub files: Vec<(Workout, ExportedFile)>,

    /// Per-workout failures (empty when everything succeeded)
    pub failures: Vec<WorkoutFailure>,

    /// Wall-clock duration of the batch
    pub duration: Duration,
}

impl BatchOutcome {
    /// Outcome for a batch that ran to completion
    pub fn completed(
        files: Vec<(Workout, ExportedFile)>,
        failures: Vec<WorkoutFailure>,
        duration: Duration,
    ) -> Self {
        Self {
            status: BatchStatus::Completed,
            files,
            failures,
            duration,
        }
    }

    /// Outcome for a cancelled batch; partial files have been discarded
    pub fn cancelled(duration: Duration) -> Self {
        Self {
            status: BatchStatus::Cancelled,
            files: Vec::new(),
            failures: Vec::new(),
            duration,
        }
    }

    /// True when the batch completed with no individual failures
    pub fn is_success(&self) -> bool {
        self.status == BatchStatus::Completed && self.failures.is_empty()
    }

    /// Logs a one-line summary plus one line per failure
    pub fn log_summary(&self) {
        match self.status {
            BatchStatus::Completed => {
                tracing::info!(
                    exported = self.files.len(),
                    failed = self.failures.len(),
                    duration_ms = self.duration.as_millis() as u64,
                    "Export batch completed"
                );
                for failure in &self.failures {
                    tracing::warn!(
                        workout_id = %failure.workout_id,
                        error = %failure.message,
                        "Workout export failed"
                    );
                }
            }
            BatchStatus::Cancelled => {
                tracing::info!(
                    duration_ms = self.duration.as_millis() as u64,
                    "Export batch cancelled"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_without_failures_is_success() {
        let outcome = BatchOutcome::completed(Vec::new(), Vec::new(), Duration::from_secs(1));
        assert!(outcome.is_success());
        assert_eq!(outcome.status, BatchStatus::Completed);
    }

    #[test]
    fn test_completed_with_failures_is_not_success() {
        let failures = vec![WorkoutFailure {
            workout_id: WorkoutId::new("w1").unwrap(),
            message: "provider timeout".to_string(),
        }];
        let outcome = BatchOutcome::completed(Vec::new(), failures, Duration::from_secs(1));
        assert!(!outcome.is_success());
    }

    #[test]
    fn test_cancelled_outcome_carries_no_files() {
        let outcome = BatchOutcome::cancelled(Duration::from_millis(40));
        assert_eq!(outcome.status, BatchStatus::Cancelled);
        assert!(outcome.files.is_empty());
        assert!(outcome.failures.is_empty());
        assert!(!outcome.is_success());
    }
}
