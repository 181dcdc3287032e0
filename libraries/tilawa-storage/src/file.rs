//! JSON file key-value store
//!
//! The whole store is one JSON object (`{"key": "value", ...}`). It is read
//! once on open and rewritten after every mutation by writing a sibling
//! temporary file and renaming it over the original, so a crash mid-write
//! leaves the previous contents intact.

use crate::error::StorageError;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tilawa_core::{KeyValueStore, Result};
use tracing::{debug, trace};

/// `KeyValueStore` persisted to a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at `path`
    ///
    /// A missing file is an empty store; parent directories are created on
    /// first write.
    ///
    /// # Errors
    /// Fails when the file exists but cannot be read or is not a JSON object
    /// of strings.
    pub fn open(path: impl Into<PathBuf>) -> std::result::Result<Self, StorageError> {
        let path = path.into();

        let entries = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => serde_json::from_str(&contents)
                .map_err(|e| StorageError::serialization(path.display().to_string(), &e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), keys = entries.len(), "Opened store");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn entries(&self) -> MutexGuard<'_, BTreeMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Apply `change` and persist the result
    ///
    /// The in-memory map is only updated once the file write succeeded.
    fn mutate(&self, change: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let mut entries = self.entries();
        let mut next = entries.clone();
        change(&mut next);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> std::result::Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| StorageError::serialization(self.path.display().to_string(), &e))?;

        let tmp = temp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        trace!(path = %self.path.display(), keys = entries.len(), "Store written");
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.mutate(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove(&self, key: &str) -> Result<()> {
        if !self.entries().contains_key(key) {
            return Ok(());
        }
        self.mutate(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&self) -> Result<()> {
        self.mutate(BTreeMap::clear)
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries().keys().cloned().collect())
    }
}
