//! A directory-scoped key-value store.
//!
//! Stands in for the browser's origin-scoped `localStorage`: each key is a
//! small JSON document in its own file under the save directory. Reads are
//! forgiving (anything unreadable is absent); writes surface real IO errors.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{StoreError, StoreResult};

/// File-backed key-value store rooted at a save directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store at `dir`, creating the directory if needed.
    pub fn open(dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|source| StoreError::Io {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// Open a store at the platform's default data directory.
    pub fn open_default() -> StoreResult<Self> {
        Self::open(default_dir()?)
    }

    /// The directory this store reads and writes.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and deserialize a value. Missing files and malformed contents
    /// both read as `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let bytes = fs::read(self.key_path(key)).ok()?;
        serde_json::from_slice(&bytes).ok()
    }

    /// Whether a value exists under `key` (readable or not).
    pub fn contains(&self, key: &str) -> bool {
        self.key_path(key).exists()
    }

    /// Serialize and write a value under `key`.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> StoreResult<()> {
        let path = self.key_path(key);
        let bytes = serde_json::to_vec_pretty(value)?;
        fs::write(&path, bytes).map_err(|source| StoreError::Io { path, source })
    }

    /// Remove the value under `key`, if any.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { path, source }),
        }
    }
}

/// The platform's default save directory for critter.
pub fn default_dir() -> StoreResult<PathBuf> {
    dirs::data_dir()
        .map(|d| d.join("critter"))
        .ok_or(StoreError::NoDataDir)
}
