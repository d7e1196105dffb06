//! Uploaded files on local disk, served read-only under `/media/`.

use acct_core::ImageUpload;

use std::io;
use std::path::{Path, PathBuf};

use uuid::Uuid;

pub const MEDIA_URL_PREFIX: &str = "/media";

const PROFILE_PICTURES_DIR: &str = "profile_pics";

#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an avatar under a fresh name.
    /// Returns the path relative to the media root, as stored on the profile.
    pub async fn save_profile_picture(&self, image: &ImageUpload) -> io::Result<String> {
        let relative = format!(
            "{}/{}.{}",
            PROFILE_PICTURES_DIR,
            Uuid::new_v4(),
            image.kind.extension()
        );
        let path = self.root.join(&relative);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, &image.bytes).await?;

        log::info!("Stored profile picture {} ({} bytes)", relative, image.bytes.len());

        Ok(relative)
    }

    /// Delete a stored file. Missing files are not an error.
    pub async fn remove(&self, relative: &str) -> io::Result<()> {
        match tokio::fs::remove_file(self.root.join(relative)).await {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// Public URL of a stored file
pub fn media_url(relative: &str) -> String {
    format!("{}/{}", MEDIA_URL_PREFIX, relative.trim_start_matches('/'))
}
