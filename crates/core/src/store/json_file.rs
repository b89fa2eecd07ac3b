//! JSON file store.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::CollectionStore;
use super::error::StoreError;
use crate::reports::Collection;

/// Encodes a collection the way it is persisted: two-space indented JSON
/// with non-ASCII text written as-is.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_pretty_json(collection: &Collection) -> Result<String, StoreError> {
    Ok(serde_json::to_string_pretty(collection)?)
}

/// Stores the collection as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store backed by `path`. Nothing is touched until the first
    /// load or save.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_raw(&self, contents: &str) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::write(parent, e))?;
        }
        fs::write(&self.path, contents).map_err(|e| StoreError::write(&self.path, e))
    }
}

impl CollectionStore for JsonFileStore {
    fn load(&self) -> Result<Collection, StoreError> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Creating empty collection file");
                self.write_raw("[]")?;
                return Ok(Collection::new());
            }
            Err(e) => return Err(StoreError::read(&self.path, e)),
        };

        match serde_json::from_slice(&raw) {
            Ok(collection) => Ok(collection),
            Err(e) => {
                // TODO: move the unreadable file aside instead of dropping it on the next save.
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Persisted collection is unreadable, treating it as empty"
                );
                Ok(Collection::new())
            }
        }
    }

    fn save(&self, collection: &Collection) -> Result<(), StoreError> {
        let json = to_pretty_json(collection)?;
        self.write_raw(&json)?;
        debug!(
            path = %self.path.display(),
            reports = collection.len(),
            "Collection saved"
        );
        Ok(())
    }
}
