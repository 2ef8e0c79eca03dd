//! Durable client-side state.
//!
//! Each store persists under its own key; writes are last-write-wins with no
//! coordination between processes. The file backend keeps the whole
//! key/value map in a single JSON document.

use std::{
    collections::HashMap,
    fmt, fs, io,
    path::PathBuf,
    sync::{Mutex, MutexGuard, PoisonError},
};

use thiserror::Error;

/// Key holding the session bearer token.
pub const TOKEN_KEY: &str = "token";

/// Key holding the persisted role spelling.
pub const ROLE_KEY: &str = "role";

/// Key holding the serialized cart lines.
pub const CART_KEY: &str = "cart";

/// Errors raised by a storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read state file {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write state file {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("state file {} holds invalid JSON", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Key/value persistence for client state.
pub trait Storage: Send + Sync + fmt::Debug {
    /// Current value for `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot persist the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Drop `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot persist the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;

    /// Drop every key.
    ///
    /// # Errors
    ///
    /// Returns an error when the backend cannot persist the removal.
    fn clear(&self) -> Result<(), StorageError>;
}

/// File-backed storage: one JSON object per state file.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    cells: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or lazily create) the state file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();

        let cells = match fs::read_to_string(&path) {
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| StorageError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
            Err(source) if source.kind() == io::ErrorKind::NotFound => HashMap::new(),
            Err(source) => return Err(StorageError::Read { path, source }),
        };

        Ok(Self {
            path,
            cells: Mutex::new(cells),
        })
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn flush(&self, cells: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: self.path.clone(),
                source,
            })?;
        }

        let contents =
            serde_json::to_string_pretty(cells).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        fs::write(&self.path, contents).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cells = self.lock();

        cells.insert(key.to_string(), value.to_string());

        self.flush(&cells)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut cells = self.lock();

        cells.remove(key);

        self.flush(&cells)
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut cells = self.lock();

        cells.clear();

        self.flush(&cells)
    }
}

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    cells: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.cells.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());

        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);

        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.lock().clear();

        Ok(())
    }
}
