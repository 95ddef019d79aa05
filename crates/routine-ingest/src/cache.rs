//! Local copy of the last successfully fetched routine.
//!
//! The cache is a pretty-printed JSON array of rows keyed by header label,
//! so it can also be read back through [`crate::read_rows`]. Writes go to a
//! temp file that is renamed over the target, so readers never see a
//! partially written cache.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use routine_model::Row;

use crate::error::{IngestError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCache {
    path: PathBuf,
}

impl RowCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached rows, or `None` when nothing has been cached yet.
    pub fn load(&self) -> Result<Option<Vec<Row>>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(IngestError::FileRead {
                    path: self.path.clone(),
                    source: e,
                });
            }
        };
        let rows: Vec<Row> = serde_json::from_slice(&bytes)?;
        tracing::debug!(rows = rows.len(), path = %self.path.display(), "loaded cached rows");
        Ok(Some(rows))
    }

    /// Replace the cache contents with `rows`.
    pub fn store(&self, rows: &[Row]) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(rows)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| IngestError::FileWrite {
                operation: "create directory",
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let temp_path = self.temp_path();
        let mut file = File::create(&temp_path).map_err(|e| IngestError::FileWrite {
            operation: "create",
            path: temp_path.clone(),
            source: e,
        })?;
        file.write_all(&bytes).map_err(|e| IngestError::FileWrite {
            operation: "write",
            path: temp_path.clone(),
            source: e,
        })?;
        file.sync_all().map_err(|e| IngestError::FileWrite {
            operation: "sync",
            path: temp_path.clone(),
            source: e,
        })?;
        drop(file);

        fs::rename(&temp_path, &self.path).map_err(|e| IngestError::FileWrite {
            operation: "replace",
            path: self.path.clone(),
            source: e,
        })?;

        tracing::info!(rows = rows.len(), path = %self.path.display(), "cache updated");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
