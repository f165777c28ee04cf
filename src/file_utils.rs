use anyhow::{Result, Context, anyhow};
use std::fs;
use std::path::Path;

use crate::backend::Upload;

// @module: File utilities for staging uploads

// @struct: File operations utility
pub struct FileManager;

impl FileManager {
    // @checks: File existence
    pub fn file_exists<P: AsRef<Path>>(path: P) -> bool {
        path.as_ref().exists() && path.as_ref().is_file()
    }

    // @reads: File into an upload payload (name + bytes + mime)
    // Any file type is accepted; the extension only informs the multipart
    // content type, it never gates the upload.
    pub fn load_upload<P: AsRef<Path>>(path: P) -> Result<Upload> {
        let path = path.as_ref();
        if !Self::file_exists(path) {
            return Err(anyhow!("Input file does not exist: {:?}", path));
        }

        let bytes = fs::read(path)
            .with_context(|| format!("Failed to read file: {:?}", path))?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());

        let mime_type = Self::guess_mime_type(path).to_string();

        Ok(Upload {
            file_name,
            mime_type,
            bytes,
        })
    }

    // @returns: Content type for the multipart part, by extension
    pub fn guess_mime_type(path: &Path) -> &'static str {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            "gif" => "image/gif",
            "bmp" => "image/bmp",
            _ => "application/octet-stream",
        }
    }
}
