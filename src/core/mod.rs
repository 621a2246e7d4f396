//! Core business logic
//!
//! The export pipeline ([`export`]) and GPX document generation ([`gpx`]).

pub mod export;
pub mod gpx;
