use std::path::PathBuf;
use std::sync::Arc;

use crate::api::session::SessionStore;
use crate::storage::DocumentStore;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
    pub sessions: SessionStore,
    pub admin_key: Arc<str>,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(store: DocumentStore, admin_key: String, public_dir: PathBuf) -> Self {
        Self {
            store: Arc::new(store),
            sessions: SessionStore::new(),
            admin_key: admin_key.into(),
            public_dir,
        }
    }
}
