//! Flat-file persistence for the report collection.
//!
//! The collection is the only unit of persistence: every save rewrites the
//! whole file, and there is no locking across processes.

mod error;
mod json_file;

pub use error::StoreError;
pub use json_file::{JsonFileStore, to_pretty_json};

use crate::reports::Collection;

/// Loads and saves a whole [`Collection`].
pub trait CollectionStore: Send + Sync {
    /// Reads the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backing medium cannot be accessed.
    /// Unparseable contents load as an empty collection.
    fn load(&self) -> Result<Collection, StoreError>;

    /// Overwrites the persisted collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    fn save(&self, collection: &Collection) -> Result<(), StoreError>;
}
