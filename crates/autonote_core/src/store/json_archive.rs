//! Flat JSON file archive.
//!
//! # Responsibility
//! - Load and rewrite the whole note collection as one JSON array.
//! - Keep file-format details out of the store orchestration.
//!
//! # Invariants
//! - A missing file loads as an empty collection.
//! - Each persist rewrites the complete file; there are no
//!   incremental writes.

use super::{ArchiveError, ArchiveResult, NoteArchive};
use crate::model::note::Note;
use log::{error, info};
use std::io;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// JSON-array-on-disk archive with an explicit storage path.
#[derive(Debug, Clone)]
pub struct JsonFileArchive {
    path: PathBuf,
}

impl JsonFileArchive {
    /// Creates an archive bound to `path`. The file is not touched
    /// until the first load or persist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The configured storage path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persistence_error(&self, source: io::Error) -> ArchiveError {
        ArchiveError::Persistence {
            path: self.path.clone(),
            source,
        }
    }
}

impl NoteArchive for JsonFileArchive {
    fn load(&self) -> ArchiveResult<Vec<Note>> {
        let started_at = Instant::now();

        if !self.path.exists() {
            info!(
                "event=store_load module=archive status=ok mode=missing_file count=0 path={}",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        let raw = std::fs::read_to_string(&self.path).map_err(|err| {
            error!(
                "event=store_load module=archive status=error error_code=read_failed path={} error={}",
                self.path.display(),
                err
            );
            self.persistence_error(err)
        })?;

        let notes: Vec<Note> = serde_json::from_str(&raw).map_err(|err| {
            error!(
                "event=store_load module=archive status=error error_code=corrupt_store path={} error={}",
                self.path.display(),
                err
            );
            ArchiveError::CorruptStore {
                path: self.path.clone(),
                message: err.to_string(),
            }
        })?;

        info!(
            "event=store_load module=archive status=ok count={} duration_ms={} path={}",
            notes.len(),
            started_at.elapsed().as_millis(),
            self.path.display()
        );
        Ok(notes)
    }

    fn persist(&self, notes: &[Note]) -> ArchiveResult<()> {
        let started_at = Instant::now();

        let body = serde_json::to_string_pretty(notes)
            .map_err(|err| self.persistence_error(io::Error::new(io::ErrorKind::InvalidData, err)))?;

        std::fs::write(&self.path, body).map_err(|err| {
            error!(
                "event=store_persist module=archive status=error error_code=write_failed path={} error={}",
                self.path.display(),
                err
            );
            self.persistence_error(err)
        })?;

        info!(
            "event=store_persist module=archive status=ok count={} duration_ms={} path={}",
            notes.len(),
            started_at.elapsed().as_millis(),
            self.path.display()
        );
        Ok(())
    }
}
