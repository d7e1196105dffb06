//! Profile entity - one-to-one extension of a user.

use crate::City;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Application-specific account details.
/// Exactly one exists per user; it is created on first access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub city: Option<City>,
    pub phone_number: String,
    /// Path of the uploaded avatar, relative to the media root
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create an empty profile for `user_id`
    pub fn new(user_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            city: None,
            phone_number: String::new(),
            image: None,
            created_at: now,
            updated_at: now,
        }
    }
}
