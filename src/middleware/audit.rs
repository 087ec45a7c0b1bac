//! Audit log sink
//!
//! Every command outcome is appended to a plain text audit file as
//! `<timestamp>\t<status> <record>`. Phone numbers in the record are masked
//! before anything reaches the disk.

use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::utils::errors::Result;
use crate::utils::helpers::redact_text;

#[derive(Clone)]
#[derive(Debug)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Format one audit line, redacting the record text
    pub fn format_line(status: u16, record: &str) -> String {
        let record = redact_text(record).replace('\n', " ");
        format!("{}\t{} {}\n", Local::now().naive_local(), status, record)
    }

    /// Append a record. The file is opened, written, flushed and closed per call.
    pub async fn record(&self, status: u16, record: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(Self::format_line(status, record).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
