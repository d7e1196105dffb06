use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Validation constraints
pub const MIN_MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_MIN_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

pub const MIN_MAX_PHONE_LENGTH: usize = 7;
pub const MAX_MAX_PHONE_LENGTH: usize = 64;
pub const DEFAULT_MAX_PHONE_LENGTH: usize = 20;

/// Limits applied by the account forms
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Shortest password the signup and password-change forms accept
    pub min_password_length: usize,
    /// Longest phone number the profile form accepts
    pub max_phone_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_phone_length: DEFAULT_MAX_PHONE_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_MIN_PASSWORD_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if self.max_phone_length < MIN_MAX_PHONE_LENGTH
            || self.max_phone_length > MAX_MAX_PHONE_LENGTH
        {
            return Err(ConfigError::config(format!(
                "validation.max_phone_length must be {}-{}, got {}",
                MIN_MAX_PHONE_LENGTH, MAX_MAX_PHONE_LENGTH, self.max_phone_length
            )));
        }

        Ok(())
    }
}
