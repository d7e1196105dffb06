//! User account entity.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered account.
///
/// `auth_version` is bumped whenever the password changes. Sessions remember
/// the version they were opened with, so older sessions stop validating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub is_active: bool,
    pub auth_version: i64,
    pub date_joined: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl User {
    /// Create a new active user with empty names
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            first_name: String::new(),
            last_name: String::new(),
            is_active: true,
            auth_version: 1,
            date_joined: Utc::now(),
            last_login: None,
        }
    }
}
