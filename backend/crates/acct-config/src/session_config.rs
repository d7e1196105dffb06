use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_SESSION_COOKIE_NAME: &str = "acct_session";

pub const MIN_INACTIVITY_DAYS: i64 = 1;
pub const MAX_INACTIVITY_DAYS: i64 = 365;
pub const DEFAULT_INACTIVITY_DAYS: i64 = 14;

/// Login session cookie settings.
///
/// Sessions expire after `inactivity_days` without a request.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    /// Only send the cookie over HTTPS
    pub secure_cookie: bool,
    pub inactivity_days: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_SESSION_COOKIE_NAME),
            secure_cookie: false,
            inactivity_days: DEFAULT_INACTIVITY_DAYS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let name_ok = !self.cookie_name.is_empty()
            && self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !name_ok {
            return Err(ConfigError::session(format!(
                "session.cookie_name must be non-empty ASCII letters, digits, '_' or '-', got '{}'",
                self.cookie_name
            )));
        }

        if !(MIN_INACTIVITY_DAYS..=MAX_INACTIVITY_DAYS).contains(&self.inactivity_days) {
            return Err(ConfigError::session(format!(
                "session.inactivity_days must be {}-{}, got {}",
                MIN_INACTIVITY_DAYS, MAX_INACTIVITY_DAYS, self.inactivity_days
            )));
        }

        Ok(())
    }
}
