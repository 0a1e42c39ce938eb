use bytes::Bytes;
use std::path::{Path as StdPath, PathBuf};
use tokio::fs;

use crate::error::{Error, Result};

const URL_PREFIX: &str = "uploads";
const ALLOWED_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

const MIB: usize = 1024 * 1024;

fn size_label(bytes: usize) -> String {
    if bytes >= MIB && bytes % MIB == 0 {
        format!("{} MB", bytes / MIB)
    } else {
        format!("{} bytes", bytes)
    }
}

/// One image file taken from a multipart form.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub data: Bytes,
}

/// Stores uploaded images under `<root>/<folder>/<uuid>.<ext>` and hands back
/// the web path `uploads/<folder>/<uuid>.<ext>` that gets persisted.
#[derive(Clone, Debug)]
pub struct ImageStorage {
    root: PathBuf,
    max_bytes: usize,
}

impl ImageStorage {
    pub fn new(root: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            root: root.into(),
            max_bytes,
        }
    }

    pub fn root(&self) -> &StdPath {
        &self.root
    }

    /// Checks size, extension and magic bytes; returns the normalized extension.
    pub fn validate(&self, upload: &ImageUpload) -> Result<String> {
        if upload.data.is_empty() {
            return Err(Error::BadRequest(format!(
                "File {} is empty",
                upload.file_name
            )));
        }
        if upload.data.len() > self.max_bytes {
            return Err(Error::BadRequest(format!(
                "File {} exceeds the {} limit",
                upload.file_name,
                size_label(self.max_bytes)
            )));
        }

        let ext = StdPath::new(&upload.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();
        if !ALLOWED_EXTENSIONS.contains(&ext.as_str()) {
            return Err(Error::BadRequest(format!(
                "File type .{} is not allowed, expected one of {}",
                ext,
                ALLOWED_EXTENSIONS.join(", ")
            )));
        }

        let data = &upload.data;
        let signature_ok = match ext.as_str() {
            "jpg" | "jpeg" => data.starts_with(&[0xFF, 0xD8, 0xFF]),
            "png" => data.starts_with(&[0x89, 0x50, 0x4E, 0x47]),
            "gif" => data.starts_with(b"GIF8"),
            "webp" => data.len() >= 12 && data.starts_with(b"RIFF") && &data[8..12] == b"WEBP",
            _ => false,
        };
        if !signature_ok {
            return Err(Error::BadRequest(format!(
                "File {} is not a valid {} image",
                upload.file_name,
                ext.to_uppercase()
            )));
        }

        Ok(ext)
    }

    pub fn validate_all(&self, uploads: &[ImageUpload]) -> Result<()> {
        for upload in uploads {
            self.validate(upload)?;
        }
        Ok(())
    }

    pub async fn save(&self, folder: &str, upload: &ImageUpload) -> Result<String> {
        let ext = self.validate(upload)?;
        let dir = self.root.join(folder);
        fs::create_dir_all(&dir).await?;

        let file_name = format!("{}.{}", uuid::Uuid::new_v4(), ext);
        fs::write(dir.join(&file_name), &upload.data)
            .await
            .map_err(|e| {
                tracing::error!(folder, error = %e, "failed to write uploaded image");
                Error::Internal(format!("Failed to save file: {}", e))
            })?;

        Ok(format!("{}/{}/{}", URL_PREFIX, folder, file_name))
    }

    /// Saves every upload or none: files already written are removed when a
    /// later one fails.
    pub async fn save_all(&self, folder: &str, uploads: &[ImageUpload]) -> Result<Vec<String>> {
        let mut saved = Vec::with_capacity(uploads.len());
        for upload in uploads {
            match self.save(folder, upload).await {
                Ok(path) => saved.push(path),
                Err(e) => {
                    self.remove_all(&saved).await;
                    return Err(e);
                }
            }
        }
        Ok(saved)
    }

    /// Best effort: a missing file is not an error.
    pub async fn remove(&self, stored_path: &str) {
        let Some(disk_path) = self.disk_path(stored_path) else {
            tracing::warn!(stored_path, "refusing to remove path outside upload root");
            return;
        };
        match fs::remove_file(&disk_path).await {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %disk_path.display(), error = %e, "failed to remove image")
            }
        }
    }

    pub async fn remove_all(&self, stored_paths: &[String]) {
        for path in stored_paths {
            self.remove(path).await;
        }
    }

    /// Maps `uploads/<folder>/<file>` back onto disk. Only paths produced by
    /// `save` are accepted.
    pub fn disk_path(&self, stored_path: &str) -> Option<PathBuf> {
        let relative = stored_path
            .trim_start_matches("./")
            .strip_prefix(URL_PREFIX)?
            .trim_start_matches('/');
        let mut segments = relative.split('/');
        let (Some(folder), Some(file), None) = (segments.next(), segments.next(), segments.next())
        else {
            return None;
        };
        let safe = |s: &str| !s.is_empty() && s != "." && s != ".." && !s.contains('\\');
        if !safe(folder) || !safe(file) {
            return None;
        }
        Some(self.root.join(folder).join(file))
    }
}
