//! Append-only UTF-8 text sink for GPX output
//!
//! Writes go through a buffer and are observed in call order; everything is
//! on disk once [`GpxWriter::close`] returns. Close is idempotent and also
//! runs on drop, so a failed export can unwind without leaking the handle.

use crate::domain::{GpxportError, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Buffered writer for a single GPX document
pub struct GpxWriter {
    inner: Option<BufWriter<File>>,
}

impl GpxWriter {
    /// Opens `path` for writing, truncating any existing file
    ///
    /// # Errors
    ///
    /// Returns [`GpxportError::Io`] if the file cannot be created.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::create(path.as_ref()).map_err(|e| {
            GpxportError::Io(format!(
                "Failed to open {} for writing: {e}",
                path.as_ref().display()
            ))
        })?;
        Ok(Self {
            inner: Some(BufWriter::new(file)),
        })
    }

    /// Appends a UTF-8 string to the file
    ///
    /// # Errors
    ///
    /// Returns [`GpxportError::Io`] on a write fault or if the writer has
    /// already been closed.
    pub fn write_str(&mut self, text: &str) -> Result<()> {
        let writer = self
            .inner
            .as_mut()
            .ok_or_else(|| GpxportError::Io("Write after close".to_string()))?;
        writer
            .write_all(text.as_bytes())
            .map_err(|e| GpxportError::Io(format!("Write failed: {e}")))
    }

    /// Flushes buffered output and releases the file handle
    ///
    /// Safe to call multiple times; only the first call does anything.
    ///
    /// # Errors
    ///
    /// Returns [`GpxportError::Io`] if the flush fails. The handle is
    /// released either way.
    pub fn close(&mut self) -> Result<()> {
        if let Some(mut writer) = self.inner.take() {
            writer
                .flush()
                .map_err(|e| GpxportError::Io(format!("Flush failed: {e}")))?;
        }
        Ok(())
    }
}

impl Drop for GpxWriter {
    fn drop(&mut self) {
        // Best effort; errors on the unwind path have nowhere to go.
        let _ = self.close();
    }
}
