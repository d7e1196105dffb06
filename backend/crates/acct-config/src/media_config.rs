use crate::{ConfigError, ConfigErrorResult, DEFAULT_MEDIA_DIRECTORY, is_contained};

use serde::Deserialize;

pub const MIN_MAX_UPLOAD_BYTES: usize = 1024;
pub const MAX_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Where uploaded profile pictures live
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MediaConfig {
    /// Relative to the config dir
    pub dir: String,
    pub max_upload_bytes: usize,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_MEDIA_DIRECTORY),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl MediaConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !is_contained(&self.dir) {
            return Err(ConfigError::media(
                "media.dir must be relative and cannot contain '..'",
            ));
        }
        if self.max_upload_bytes < MIN_MAX_UPLOAD_BYTES
            || self.max_upload_bytes > MAX_MAX_UPLOAD_BYTES
        {
            return Err(ConfigError::media(format!(
                "media.max_upload_bytes must be {}-{}, got {}",
                MIN_MAX_UPLOAD_BYTES, MAX_MAX_UPLOAD_BYTES, self.max_upload_bytes
            )));
        }

        Ok(())
    }
}
