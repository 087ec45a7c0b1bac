//! Raw message repository implementation
//!
//! Holds the last full snapshot received from the SMS gateway. The dedup
//! watermark is always derived from this snapshot.

use std::path::PathBuf;

use crate::database::store::JsonStore;
use crate::models::message::Snapshot;
use crate::utils::errors::Result;

#[derive(Clone)]
#[derive(Debug)]
pub struct MessageRepository {
    store: JsonStore<Snapshot>,
}

impl MessageRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            store: JsonStore::new(path),
        }
    }

    /// Load the last persisted snapshot
    pub async fn load(&self) -> Result<Snapshot> {
        self.store.load().await
    }

    /// Replace the persisted snapshot
    pub async fn save(&self, snapshot: &Snapshot) -> Result<()> {
        self.store.save(snapshot).await
    }
}
