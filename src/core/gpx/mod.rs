//! GPX document generation
//!
//! The writing pipeline for a single workout: [`writer`] is the append-only
//! UTF-8 sink, [`merge`] joins heart-rate samples against location
//! timestamps, and [`document`] drives both to stream a complete GPX 1.1
//! document.

pub mod document;
pub mod merge;
pub mod writer;

pub use document::write_document;
pub use merge::HeartRateCursor;
pub use writer::GpxWriter;
