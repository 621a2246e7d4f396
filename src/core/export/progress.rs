//! Batch progress reporting
//!
//! The coordinator publishes progress on a `tokio::sync::watch` channel.
//! `None` means no batch is running; progress is cleared back to `None` on
//! every exit path so a finished or cancelled batch never leaves a stale
//! counter behind.

use serde::Serialize;

/// Completion counter for one export batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExportProgress {
    /// Number of workouts in the batch
    pub total: usize,

    /// Workouts finished so far (success or individual failure)
    pub completed: usize,
}

impl ExportProgress {
    /// Fresh counter for a batch of `total` workouts
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
        }
    }

    /// Records one finished workout
    pub fn advance(&mut self) {
        debug_assert!(self.completed < self.total);
        self.completed += 1;
    }

    /// Completed fraction in [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.completed as f64 / self.total as f64
        }
    }
}

impl std::fmt::Display for ExportProgress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.completed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_advances() {
        let mut progress = ExportProgress::new(3);
        assert_eq!(progress.completed, 0);
        progress.advance();
        progress.advance();
        assert_eq!(progress.completed, 2);
        assert_eq!(progress.to_string(), "2/3");
    }

    #[test]
    fn test_fraction() {
        let mut progress = ExportProgress::new(4);
        progress.advance();
        assert!((progress.fraction() - 0.25).abs() < f64::EPSILON);
        assert!((ExportProgress::new(0).fraction() - 1.0).abs() < f64::EPSILON);
    }
}
