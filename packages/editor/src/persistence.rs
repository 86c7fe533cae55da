//! # Persistence
//!
//! Key/value storage of the element list and its schema version.
//!
//! | key                | value                         |
//! |--------------------|-------------------------------|
//! | `editableElements` | JSON array of elements        |
//! | `elementsVersion`  | [`SCHEMA_VERSION`]            |
//!
//! Loading never fails: a missing or mismatched version, or a payload that is
//! not a valid element array, yields an empty store.

use crate::errors::{PersistenceError, PersistenceResult};
use crate::store::{ChangeListener, ElementStore, StoreEvent};
use sitecraft_model::Element;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing::{debug, info, warn};

pub const ELEMENTS_KEY: &str = "editableElements";
pub const VERSION_KEY: &str = "elementsVersion";
pub const SCHEMA_VERSION: &str = "1.0";

/// Durable string key/value storage
pub trait KeyValueStorage: Send + Sync {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> PersistenceResult<()>;
    fn remove(&self, key: &str) -> PersistenceResult<()>;
}

/// In-memory storage (tests, embedding)
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PersistenceResult<()> {
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistenceResult<()> {
        self.entries().remove(key);
        Ok(())
    }
}

/// Directory-backed storage: one `<key>.json` file per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PersistenceResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(PersistenceError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> PersistenceResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistenceResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Loads and saves element lists through a [`KeyValueStorage`]
#[derive(Clone)]
pub struct Persistence {
    storage: Arc<dyn KeyValueStorage>,
}

impl Persistence {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    pub fn memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn file(dir: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FileStorage::new(dir)))
    }

    /// Load the saved elements, or an empty list if nothing trustworthy is stored
    pub fn load(&self) -> Vec<Element> {
        match self.try_load() {
            Ok(Some(elements)) => {
                info!(count = elements.len(), "Loaded saved elements");
                elements
            }
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "Discarding unreadable saved elements");
                Vec::new()
            }
        }
    }

    fn try_load(&self) -> PersistenceResult<Option<Vec<Element>>> {
        let version = self.storage.get(VERSION_KEY)?;
        if version.as_deref() != Some(SCHEMA_VERSION) {
            if version.is_some() {
                warn!(found = ?version, expected = SCHEMA_VERSION, "Schema version mismatch");
            }
            return Ok(None);
        }

        match self.storage.get(ELEMENTS_KEY)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    pub fn save(&self, elements: &[Element]) -> PersistenceResult<()> {
        let json = serde_json::to_string(elements)?;
        self.storage.set(ELEMENTS_KEY, &json)?;
        self.storage.set(VERSION_KEY, SCHEMA_VERSION)?;
        debug!(count = elements.len(), "Saved elements");
        Ok(())
    }

    pub fn clear(&self) -> PersistenceResult<()> {
        self.storage.remove(ELEMENTS_KEY)?;
        self.storage.remove(VERSION_KEY)?;
        Ok(())
    }

    /// Listener that writes every store change back to storage.
    /// Failures are logged; the store is never rolled back.
    pub fn autosave(&self) -> ChangeListener {
        let persistence = self.clone();
        Box::new(move |event| {
            let result = match event {
                StoreEvent::Changed(snapshot) => persistence.save(snapshot),
                StoreEvent::Cleared => persistence.clear(),
            };
            if let Err(e) = result {
                warn!(error = %e, "Autosave failed");
            }
        })
    }

    /// Load the saved state into a new store that autosaves from then on
    pub fn open_store(&self) -> ElementStore {
        let mut store = ElementStore::from_elements(self.load());
        store.subscribe(self.autosave());
        store
    }
}

impl fmt::Debug for Persistence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Persistence").finish_non_exhaustive()
    }
}
