//! Asset catalog: resolves opaque asset ids to files inside the storage root.
//!
//! Resolution is confined strictly to the configured root. Ids containing
//! path separators or `..` components are rejected before touching the
//! filesystem, and the resolved path is canonicalized and prefix-checked so
//! symlink escapes cannot leak files from outside the root.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// A media file resolved for streaming. Resolved fresh on every request;
/// size and content type are fixed once resolved.
#[derive(Debug, Clone)]
pub struct MediaAsset {
    /// The identifier the client requested (the file name).
    pub id: String,
    /// Canonicalized on-disk path, guaranteed inside the storage root.
    pub path: PathBuf,
    /// Total file size in bytes.
    pub size: u64,
    /// MIME type derived from the file extension.
    pub content_type: &'static str,
}

/// Locates assets inside a fixed storage root.
#[derive(Debug, Clone)]
pub struct AssetStore {
    root: PathBuf,
}

impl AssetStore {
    /// Create a store rooted at `root`. The directory must exist; the root is
    /// canonicalized once here so per-request confinement checks are a plain
    /// prefix comparison.
    pub fn new(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();
        let root = root.canonicalize().map_err(|e| {
            Error::Internal(format!("Storage root {:?} is not usable: {}", root, e))
        })?;
        if !root.is_dir() {
            return Err(Error::Internal(format!(
                "Storage root {:?} is not a directory",
                root
            )));
        }
        Ok(Self { root })
    }

    /// The canonicalized storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an asset id to a [`MediaAsset`].
    ///
    /// Returns [`Error::Validation`] for ids that attempt to escape the root
    /// and [`Error::NotFound`] for ids that do not name a regular file.
    pub async fn locate(&self, id: &str) -> Result<MediaAsset> {
        validate_asset_id(id)?;

        let candidate = self.root.join(id);

        // Canonicalize to collapse any symlink indirection, then confine.
        let path = tokio::fs::canonicalize(&candidate)
            .await
            .map_err(|_| Error::not_found("asset", id))?;
        if !path.starts_with(&self.root) {
            tracing::warn!(id, "Asset id resolved outside the storage root");
            return Err(Error::Validation("Invalid asset id".into()));
        }

        let metadata = tokio::fs::metadata(&path)
            .await
            .map_err(|_| Error::not_found("asset", id))?;
        if !metadata.is_file() {
            return Err(Error::not_found("asset", id));
        }

        Ok(MediaAsset {
            id: id.to_string(),
            content_type: guess_content_type(id),
            size: metadata.len(),
            path,
        })
    }

    /// List all regular files in the storage root as assets, sorted by id.
    pub async fn list(&self) -> Result<Vec<MediaAsset>> {
        let mut entries = tokio::fs::read_dir(&self.root).await?;
        let mut assets = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let Ok(name) = entry.file_name().into_string() else {
                continue;
            };
            assets.push(MediaAsset {
                content_type: guess_content_type(&name),
                path: entry.path(),
                size: metadata.len(),
                id: name,
            });
        }

        assets.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(assets)
    }
}

/// Reject ids that could name anything outside the storage root.
fn validate_asset_id(id: &str) -> Result<()> {
    if id.is_empty()
        || id.contains('/')
        || id.contains('\\')
        || id.contains("..")
        || id.starts_with('.')
    {
        return Err(Error::Validation("Invalid asset id".into()));
    }
    Ok(())
}

/// Guess the MIME type from the file extension.
fn guess_content_type(file_name: &str) -> &'static str {
    let ext = file_name.rsplit('.').next().unwrap_or("");

    match ext {
        "mp4" | "m4v" => "video/mp4",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "webm" => "video/webm",
        "ts" => "video/mp2t",
        "mov" => "video/quicktime",
        "wmv" => "video/x-ms-wmv",
        "flv" => "video/x-flv",
        "m4a" => "audio/mp4",
        "mp3" => "audio/mpeg",
        "flac" => "audio/flac",
        "wav" => "audio/wav",
        _ => "application/octet-stream",
    }
}
