//! Document store gateway.
//!
//! The whole league lives in one pretty-printed JSON file. Every
//! request re-reads the file (no cross-request cache), mutates the
//! in-memory document, and writes the file back wholesale. Mutations
//! run under a single-writer lock so concurrent requests serialize
//! instead of silently overwriting each other.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::models::{LeagueDoc, MutationError};

/// Errors that can occur while persisting the document.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A mutation outcome: either the store failed, or the operation itself
/// was rejected with a user-visible reason.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Rejected(#[from] MutationError),
}

/// Gateway over the persisted league document.
#[derive(Debug)]
pub struct DocumentStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl DocumentStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the persisted document.
    ///
    /// Any failure (missing file, unreadable, malformed JSON) yields the
    /// default document shape. On success, top-level keys absent from an
    /// older document are backfilled from the defaults; loaded values
    /// win for keys present in both.
    pub fn load(&self) -> LeagueDoc {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!("No readable store at {:?} ({}), using defaults", self.path, e);
                return LeagueDoc::default();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(doc) => doc,
            Err(e) => {
                warn!("Malformed store at {:?} ({}), using defaults", self.path, e);
                LeagueDoc::default()
            }
        }
    }

    /// Serialize the full document (pretty-printed) and overwrite the
    /// store file.
    pub fn save(&self, doc: &LeagueDoc) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json)?;
        debug!("Saved document to {:?}", self.path);
        Ok(())
    }

    /// Run one mutation: load, apply, persist, all under the writer
    /// lock. A rejected mutation leaves the store untouched.
    pub async fn mutate<T>(
        &self,
        op: impl FnOnce(&mut LeagueDoc) -> Result<T, MutationError>,
    ) -> Result<T, GatewayError> {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load();
        let out = op(&mut doc)?;
        self.save(&doc)?;
        Ok(out)
    }
}
