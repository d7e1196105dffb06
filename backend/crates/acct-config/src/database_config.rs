use crate::{ConfigError, ConfigErrorResult, DEFAULT_DATABASE_FILENAME, is_contained};

use serde::Deserialize;

/// Location of the SQLite file holding accounts, profiles and sessions.
///
/// The file is created on first start, together with any missing parent
/// directories under the config dir.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Relative to the config dir
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: String::from(DEFAULT_DATABASE_FILENAME),
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.path.trim().is_empty() {
            return Err(ConfigError::database("database.path cannot be empty"));
        }
        if !is_contained(&self.path) {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }

        Ok(())
    }
}
