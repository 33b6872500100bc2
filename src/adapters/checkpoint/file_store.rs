//! JSON-file checkpoint store.
//!
//! The file holds the last attachment that was delivered, `ts` included.
//! Only `ts` is read back.

use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::domain::errors::CheckpointError;
use crate::domain::models::{Attachment, Watermark};
use crate::domain::ports::CheckpointStore;

#[derive(Debug, Deserialize)]
struct StoredCheckpoint {
    ts: i64,
}

/// Checkpoint kept in a single JSON file, replaced atomically on save.
#[derive(Debug, Clone)]
pub struct FileCheckpointStore {
    path: PathBuf,
}

impl FileCheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_error(&self, err: impl ToString) -> CheckpointError {
        CheckpointError::Read {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }

    fn write_error(&self, err: impl ToString) -> CheckpointError {
        CheckpointError::Write {
            path: self.path.clone(),
            message: err.to_string(),
        }
    }
}

impl CheckpointStore for FileCheckpointStore {
    fn load(&self) -> Result<Watermark, CheckpointError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no checkpoint yet, starting from zero");
                return Ok(Watermark::ZERO);
            }
            Err(e) => return Err(self.read_error(e)),
        };

        let stored: StoredCheckpoint =
            serde_json::from_reader(BufReader::new(file)).map_err(|e| {
                if e.is_io() {
                    self.read_error(e)
                } else {
                    CheckpointError::Invalid {
                        path: self.path.clone(),
                        message: e.to_string(),
                    }
                }
            })?;
        Ok(Watermark(stored.ts))
    }

    fn save(&self, attachment: &Attachment) -> Result<(), CheckpointError> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|e| self.write_error(e))?;

        // Write next to the target so the rename stays on one filesystem.
        let tmp = NamedTempFile::new_in(dir).map_err(|e| self.write_error(e))?;
        {
            let mut writer = BufWriter::new(tmp.as_file());
            serde_json::to_writer_pretty(&mut writer, attachment)
                .map_err(|e| self.write_error(e))?;
            writer.flush().map_err(|e| self.write_error(e))?;
        }
        tmp.persist(&self.path).map_err(|e| self.write_error(e.error))?;

        tracing::debug!(path = %self.path.display(), ts = attachment.ts, "checkpoint saved");
        Ok(())
    }
}
