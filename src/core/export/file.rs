//! Scoped ownership of exported files
//!
//! An exported GPX document lives on disk only as long as someone owns its
//! [`ExportedFile`] handle. Dropping the handle deletes the file, which
//! covers every failure path for free: a half-written file whose export
//! errored out never survives the unwind. A caller that wants the file to
//! outlive the handle claims it with [`ExportedFile::keep`].

use std::fs;
use std::path::{Path, PathBuf};

/// Handle owning one exported GPX file on disk
#[derive(Debug)]
pub struct ExportedFile {
    path: PathBuf,
    kept: bool,
}

impl ExportedFile {
    /// Takes ownership of the file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self { path, kept: false }
    }

    /// Path of the file while the handle is alive
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Releases ownership: the file stays on disk after the handle drops
    pub fn keep(mut self) -> PathBuf {
        self.kept = true;
        self.path.clone()
    }
}

impl Drop for ExportedFile {
    fn drop(&mut self) {
        if !self.kept {
            if let Err(e) = fs::remove_file(&self.path) {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(
                        path = %self.path.display(),
                        error = %e,
                        "Failed to remove unclaimed export file"
                    );
                }
            }
        }
    }
}
