//! Logging and observability
//!
//! Structured logging via tracing with console output and optional
//! JSON-formatted rotating file logs.

pub mod structured;

pub use structured::{init_logging, LoggingGuard};
