//! External integrations
//!
//! Adapters wrap everything outside the core pipeline. Today that is the
//! health-data provider; the filesystem sink is simple enough to live in
//! the core GPX writer.

pub mod provider;
