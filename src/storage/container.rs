//! Record container handed to the popup content at startup.
//!
//! A directory holding `records.json`, a JSON array of [`UploadRecord`]s.
//! The lifecycle core only carries the container around; the upload intake
//! appends and the popup content reads.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::model::constants::RECORDS_FILE_NAME;

/// One file handed to the upload subsystem.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub path: PathBuf,
    /// Unix seconds.
    pub dropped_at: u64,
}

impl UploadRecord {
    /// Record stamped with the current time.
    pub fn now(path: PathBuf) -> Self {
        let dropped_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self { path, dropped_at }
    }
}

pub struct RecordContainer {
    store_path: PathBuf,
    records: RefCell<Vec<UploadRecord>>,
}

impl RecordContainer {
    /// Open the container in `dir`, creating the directory and an empty
    /// store if needed.
    pub fn open(dir: &Path) -> Result<Self, StorageError> {
        fs::create_dir_all(dir).map_err(|source| StorageError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let store_path = dir.join(RECORDS_FILE_NAME);
        let records = match fs::read_to_string(&store_path) {
            Ok(contents) if contents.trim().is_empty() => Vec::new(),
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                    path: store_path.clone(),
                    source,
                })?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                fs::write(&store_path, "[]").map_err(|source| StorageError::Io {
                    path: store_path.clone(),
                    source,
                })?;
                Vec::new()
            }
            Err(source) => {
                return Err(StorageError::Io {
                    path: store_path,
                    source,
                })
            }
        };

        log::debug!(
            "Opened record container at {} ({} records)",
            store_path.display(),
            records.len()
        );
        Ok(Self {
            store_path,
            records: RefCell::new(records),
        })
    }

    /// Open the container in the configured (or platform default) data dir.
    pub fn open_in(dir: Option<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.ok_or(StorageError::NoDataDir)?;
        Self::open(&dir)
    }

    /// Path of `records.json`.
    pub fn path(&self) -> &Path {
        &self.store_path
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Snapshot of all records, oldest first.
    pub fn records(&self) -> Vec<UploadRecord> {
        self.records.borrow().clone()
    }

    /// Append records and persist the whole store.
    ///
    /// On a write failure the in-memory list is rolled back.
    pub fn append<I>(&self, new: I) -> Result<usize, StorageError>
    where
        I: IntoIterator<Item = UploadRecord>,
    {
        let mut records = self.records.borrow_mut();
        let before = records.len();
        records.extend(new);
        let added = records.len() - before;
        if added == 0 {
            return Ok(0);
        }

        let written = serde_json::to_string_pretty(&*records)
            .map_err(StorageError::from)
            .and_then(|json| {
                fs::write(&self.store_path, json).map_err(|source| StorageError::Io {
                    path: self.store_path.clone(),
                    source,
                })
            });
        if let Err(e) = written {
            records.truncate(before);
            return Err(e);
        }
        Ok(added)
    }
}
