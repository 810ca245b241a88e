// ABOUTME: Key-value store persisted as a single JSON object on disk
// ABOUTME: Writes are serialized through a mutex and replace the file atomically
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::KeyValueStore;
use crate::errors::{AppError, AppResult};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use tracing::{debug, warn};

const APP_DIR: &str = "fitcoach";
const STATE_FILE: &str = "state.json";

/// Store backed by a JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`, starting empty when the file does not exist
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not a
    /// JSON object of strings
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::serialization(format!(
                    "State file {} is not valid: {e}",
                    path.display()
                ))
            })?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), keys = entries.len(), "Opened state file");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Open the store at the default location under the user's data directory
    ///
    /// # Errors
    ///
    /// Returns an error if no data directory is known for this platform or
    /// the file cannot be read
    pub fn open_default() -> AppResult<Self> {
        Self::open(default_path()?)
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::internal("State store lock poisoned"))
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Failed to replace state file");
            if let Err(cleanup) = fs::remove_file(&tmp) {
                debug!(path = %tmp.display(), error = %cleanup, "Temporary state file left behind");
            }
            AppError::from(e)
        })
    }

    /// Apply a change to a copy of the entries and keep it only once it is on disk
    fn update<F>(&self, apply: F) -> AppResult<()>
    where
        F: FnOnce(&mut BTreeMap<String, String>) -> bool,
    {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        if apply(&mut next) {
            self.persist(&next)?;
            *entries = next;
        }
        Ok(())
    }
}

/// `<data dir>/fitcoach/state.json`
///
/// # Errors
///
/// Returns a configuration error if the platform has no data directory
pub fn default_path() -> AppResult<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR).join(STATE_FILE))
        .ok_or_else(|| AppError::config("No data directory available for the state file"))
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.update(|entries| {
            entries.insert(key.to_owned(), value.to_owned()).as_deref() != Some(value)
        })
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.update(|entries| entries.remove(key).is_some())
    }

    fn keys(&self) -> AppResult<Vec<String>> {
        Ok(self.lock()?.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("nested").join("state.json")).unwrap();
        assert!(store.keys().unwrap().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_failed_write_leaves_entries_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::open(dir.path().join("blocker").join("state.json")).unwrap();
        store.set("kept", "1").unwrap();

        fs::remove_dir_all(dir.path().join("blocker")).unwrap();
        fs::write(dir.path().join("blocker"), "not a directory").unwrap();

        assert!(store.set("flag", "true").is_err());
        assert_eq!(store.get("flag").unwrap(), None);
        assert!(store.remove("kept").is_err());
        assert_eq!(store.get("kept").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn test_failed_rename_removes_temporary_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        let store = JsonFileStore::open(&path).unwrap();

        fs::create_dir_all(path.join("occupied")).unwrap();

        assert!(store.set("flag", "true").is_err());
        assert!(!path.with_extension("json.tmp").exists());
        assert_eq!(store.get("flag").unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, "not json").unwrap();
        assert!(JsonFileStore::open(&path).is_err());
    }
}
