//! The report book: one load-mutate-save cycle per interaction.

use std::io::Cursor;
use std::sync::{Mutex, MutexGuard, PoisonError};

use thiserror::Error;
use tracing::info;

use stepbook_shared::AppError;

use crate::document::DocumentRenderer;
use crate::reports::{self, Action, Change, Collection, ReportError};
use crate::store::{CollectionStore, StoreError, to_pretty_json};

/// Errors raised by [`ReportBook`].
#[derive(Debug, Error)]
pub enum BookError {
    /// Persistence failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The action addressed a missing report or step.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl From<BookError> for AppError {
    fn from(err: BookError) -> Self {
        match err {
            BookError::Report(e) => Self::NotFound(e.to_string()),
            BookError::Store(e) => Self::Storage(e.to_string()),
        }
    }
}

/// Result of [`ReportBook::execute`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Collection after the action, as persisted.
    pub collection: Collection,
    /// Whether the view needs refreshing.
    pub change: Change,
}

/// Ties a store and a renderer together.
///
/// Each call reloads the collection from the store; nothing is cached between
/// calls. Mutations within one process are serialized.
pub struct ReportBook {
    store: Box<dyn CollectionStore>,
    renderer: DocumentRenderer,
    lock: Mutex<()>,
}

impl ReportBook {
    /// Creates a report book.
    pub fn new(store: impl CollectionStore + 'static, renderer: DocumentRenderer) -> Self {
        Self {
            store: Box::new(store),
            renderer,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock carries no broken state.
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads the current collection.
    pub fn collection(&self) -> Result<Collection, BookError> {
        let _guard = self.guard();
        Ok(self.store.load()?)
    }

    /// Loads, applies `action`, and saves when the collection changed.
    pub fn execute(&self, action: &Action) -> Result<Outcome, BookError> {
        let _guard = self.guard();
        let current = self.store.load()?;
        let applied = reports::apply(current, action)?;

        if applied.change.is_changed() {
            self.store.save(&applied.collection)?;
            info!(?action, reports = applied.collection.len(), "Collection updated");
        }

        Ok(Outcome {
            collection: applied.collection,
            change: applied.change,
        })
    }

    /// The collection encoded exactly as it is persisted.
    pub fn export_json(&self) -> Result<String, BookError> {
        let collection = self.collection()?;
        Ok(to_pretty_json(&collection)?)
    }

    /// The collection rendered as a PDF, positioned at its start.
    pub fn export_document(&self) -> Result<Cursor<Vec<u8>>, BookError> {
        let collection = self.collection()?;
        Ok(self.renderer.render(&collection))
    }
}
