//! Persistence store
//!
//! File-backed analog of the original's local-storage key: the whole table
//! is written as compact JSON after every successful refresh and read back
//! wholesale on startup. Absence of the file is not an error - the table
//! simply starts empty. Read or write trouble is logged and never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::core::GradeTable;

/// File name under the user data directory
pub const STORE_FILE_NAME: &str = "gpa_jotter_data.json";

/// Where the table is persisted between runs
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// A store at an explicit path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default location: `<user data dir>/gpa-jotter/gpa_jotter_data.json`.
    /// `None` when the platform exposes no data directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("gpa-jotter").join(STORE_FILE_NAME))
    }

    /// The path this store reads and writes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted table, or an empty one.
    ///
    /// A missing file yields an empty table silently; unreadable or
    /// undecodable content yields an empty table with a warning and
    /// leaves the file in place.
    pub fn load(&self) -> GradeTable {
        if !self.path.exists() {
            return GradeTable::new();
        }
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) => {
                warn!("could not read {}: {}", self.path.display(), err);
                return GradeTable::new();
            }
        };
        match serde_json::from_str(&content) {
            Ok(table) => table,
            Err(err) => {
                warn!("ignoring undecodable store {}: {}", self.path.display(), err);
                GradeTable::new()
            }
        }
    }

    /// Persist the table as compact JSON, creating the parent directory
    /// on demand. Failures are logged and swallowed.
    pub fn save(&self, table: &GradeTable) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                warn!("could not create {}: {}", parent.display(), err);
                return;
            }
        }
        let json = match serde_json::to_string(table) {
            Ok(json) => json,
            Err(err) => {
                warn!("could not encode table: {}", err);
                return;
            }
        };
        if let Err(err) = fs::write(&self.path, json) {
            warn!("could not write {}: {}", self.path.display(), err);
        }
    }
}
