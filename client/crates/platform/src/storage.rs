//! Durable Key-Value Storage
//!
//! Client-side string storage that survives restarts, the way browser
//! local storage does. Reads and writes are synchronous.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;

use crate::sync::lock;

/// Storage write errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Storage encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Key-value storage collaborator
pub trait KeyValueStorage: Send + Sync {
    /// Read a value; unreadable storage reads as absent
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a key; removing an absent key succeeds
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ============================================================================
// In-memory storage
// ============================================================================

/// Process-local storage, lost on exit
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.entries).is_empty()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        lock(&self.entries).get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        lock(&self.entries).insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        lock(&self.entries).remove(key);
        Ok(())
    }
}

// ============================================================================
// File storage
// ============================================================================

/// Storage persisted as a single JSON object file
///
/// Every write rewrites the whole file through a temporary sibling and a
/// rename. A missing file is an empty store.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Load for a write; a corrupt file is replaced rather than blocking writes
    fn load_for_write(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.load() {
            Err(StorageError::Encoding(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Discarding corrupt storage file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, serde_json::to_vec_pretty(entries)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self.load() {
            Ok(entries) => entries.get(key).cloned(),
            Err(e) => {
                tracing::debug!(path = %self.path.display(), error = %e, "Storage unreadable");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = lock(&self.write_lock);
        let mut entries = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let _guard = lock(&self.write_lock);
        if !self.path.exists() {
            return Ok(());
        }
        let mut entries = self.load_for_write()?;
        if entries.remove(key).is_some() {
            self.save(&entries)?;
        }
        Ok(())
    }
}
