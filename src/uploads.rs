//! src/uploads.rs

use anyhow::Context;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// A file of the current request, parked in the upload directory.
#[derive(Debug, Clone)]
pub struct StoredUpload {
    /// file name as sent by the client
    pub filename: String,
    pub path: PathBuf,
    pub content_type: String,
}

/// Files written to the shared upload directory for one request.
///
/// Every file gets a random name, so concurrent requests never collide.
/// `cleanup` must run once the request is done with the files.
#[derive(Debug)]
pub struct TempUploads {
    dir: PathBuf,
    files: Vec<StoredUpload>,
}

impl TempUploads {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            files: Vec::new(),
        }
    }

    pub fn files(&self) -> &[StoredUpload] {
        &self.files
    }

    #[tracing::instrument(name = "Prepare upload directory", skip(self), fields(dir = %self.dir.display()))]
    pub async fn prepare(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create upload directory {}", self.dir.display()))
    }

    /// Write one uploaded file. Empty files are skipped and yield `None`.
    #[tracing::instrument(name = "Store uploaded file", skip(self, bytes), fields(size = bytes.len()))]
    pub async fn store(
        &mut self,
        filename: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> anyhow::Result<Option<&StoredUpload>> {
        if bytes.is_empty() {
            return Ok(None);
        }
        let path = self.dir.join(temp_file_name(filename));
        tokio::fs::write(&path, bytes)
            .await
            .with_context(|| format!("Failed to write uploaded file {}", path.display()))?;
        let content_type = content_type
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_CONTENT_TYPE)
            .to_string();
        self.files.push(StoredUpload {
            filename: filename.to_string(),
            path,
            content_type,
        });
        Ok(self.files.last())
    }

    /// Delete every stored file. Failures are logged, never returned.
    #[tracing::instrument(name = "Clean up uploaded files", skip(self), fields(files = self.files.len()))]
    pub async fn cleanup(self) {
        for file in self.files {
            if let Err(e) = tokio::fs::remove_file(&file.path).await {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to delete temp file {}",
                    file.path.display()
                );
            }
        }
    }
}

/// `{uuid}{.ext}` keeping the extension of the client's file name.
fn temp_file_name(filename: &str) -> String {
    let extension = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext))
        .unwrap_or_default();
    format!("{}{}", Uuid::new_v4(), extension)
}
