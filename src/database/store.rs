//! JSON file store
//!
//! Both persisted collections (raw messages and user profiles) are kept as a
//! single JSON document each, read and written whole.

use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{de::DeserializeOwned, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::utils::errors::Result;
use crate::utils::logging::log_storage_recovery;

/// A JSON document on disk holding one value of type `T`
#[derive(Debug, Clone)]
pub struct JsonStore<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonStore<T>
where
    T: Serialize + DeserializeOwned + Default,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the document.
    ///
    /// A missing, empty or malformed file is replaced by an empty document
    /// and read as `T::default()`.
    pub async fn load(&self) -> Result<T> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Store file missing, creating it");
                return self.reinitialize().await;
            }
            Err(e) => return Err(e.into()),
        };

        if content.trim().is_empty() {
            log_storage_recovery(&self.path.display().to_string(), "file is empty");
            return self.reinitialize().await;
        }

        match serde_json::from_str(&content) {
            Ok(value) => Ok(value),
            Err(e) => {
                log_storage_recovery(&self.path.display().to_string(), &e.to_string());
                self.reinitialize().await
            }
        }
    }

    /// Replace the document with `value`.
    ///
    /// Writes go to a sibling temp file that is then renamed over the
    /// target, so readers never observe a half-written document.
    pub async fn save(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let serialized = serde_json::to_string_pretty(value)?;
        let tmp_path = self.path.with_extension("json.tmp");

        let mut file = tokio::fs::File::create(&tmp_path).await?;
        file.write_all(serialized.as_bytes()).await?;
        file.flush().await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&tmp_path, &self.path).await?;
        debug!(path = %self.path.display(), bytes = serialized.len(), "Store saved");
        Ok(())
    }

    async fn reinitialize(&self) -> Result<T> {
        let value = T::default();
        self.save(&value).await?;
        Ok(value)
    }
}
