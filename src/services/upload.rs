//! Image upload payloads and client-side checks

use std::path::Path;
use crate::config::UploadConfig;
use crate::models::UploadedFile;
use crate::utils::errors::{EventDeskError, Result, UploadError};
use crate::utils::helpers::{format_bytes, sanitize_filename};

/// A file selected for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

impl ImageUpload {
    pub fn new(filename: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename: sanitize_filename(filename),
            bytes,
        }
    }

    /// Read a file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        Ok(Self::new(&filename, bytes))
    }

    pub fn extension(&self) -> String {
        Path::new(&self.filename)
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default()
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    /// Check type and size against the configured limits
    pub fn validate(&self, config: &UploadConfig) -> Result<()> {
        if self.bytes.is_empty() {
            return Err(EventDeskError::Upload(UploadError::Empty));
        }

        let extension = self.extension();
        let allowed = config
            .allowed_extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(&extension));
        if !allowed {
            return Err(EventDeskError::Upload(UploadError::UnsupportedType(
                if extension.is_empty() { self.filename.clone() } else { extension },
            )));
        }

        if self.size() > config.max_file_size_bytes() {
            return Err(EventDeskError::Upload(UploadError::TooLarge {
                size: format_bytes(self.size()),
                limit: format_bytes(config.max_file_size_bytes()),
            }));
        }

        Ok(())
    }
}

/// Services that accept image uploads
#[allow(async_fn_in_trait)]
pub trait ImageUploader {
    async fn upload_image(&self, upload: ImageUpload) -> Result<UploadedFile>;
}
