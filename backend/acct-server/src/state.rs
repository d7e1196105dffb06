use crate::{MediaStorage, ServerResult, Templates};

use acct_config::Config;
use acct_core::{PasswordPolicy, ProfileLimits};
use acct_db::{ProfileRepository, UserRepository};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub templates: Arc<Templates>,
    pub media: MediaStorage,
    pub password_policy: PasswordPolicy,
    pub profile_limits: ProfileLimits,
}

impl AppState {
    pub fn new(
        pool: SqlitePool,
        media: MediaStorage,
        password_policy: PasswordPolicy,
        profile_limits: ProfileLimits,
    ) -> ServerResult<Self> {
        Ok(Self {
            pool,
            templates: Arc::new(Templates::new()?),
            media,
            password_policy,
            profile_limits,
        })
    }

    /// State with limits and media root taken from a validated config
    pub fn from_config(pool: SqlitePool, config: &Config) -> ServerResult<Self> {
        Self::new(
            pool,
            MediaStorage::new(config.media_dir()?),
            PasswordPolicy::new(config.validation.min_password_length),
            ProfileLimits {
                max_phone_length: config.validation.max_phone_length,
                max_upload_bytes: config.media.max_upload_bytes,
            },
        )
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn profiles(&self) -> ProfileRepository {
        ProfileRepository::new(self.pool.clone())
    }
}
