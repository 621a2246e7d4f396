//! Export pipeline
//!
//! [`workout`] exports a single workout end to end; [`coordinator`] fans
//! that out over a whole batch with progress reporting and cooperative
//! cancellation. [`file`] scopes the lifetime of exported files, [`outcome`]
//! reports how a batch went.

pub mod coordinator;
pub mod file;
pub mod outcome;
pub mod progress;
pub mod workout;

pub use coordinator::ExportCoordinator;
pub use file::ExportedFile;
pub use outcome::{BatchOutcome, BatchStatus, WorkoutFailure};
pub use progress::ExportProgress;
pub use workout::export_workout;
