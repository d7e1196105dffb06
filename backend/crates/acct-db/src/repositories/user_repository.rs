//! User repository.
//!
//! Usernames are unique and case-sensitive. A duplicate insert or rename
//! surfaces as `DbError::UniqueViolation` on `username`, which callers turn
//! into a form error.

use super::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use acct_core::User;

use chrono::{DateTime, Utc};
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

const USER_COLUMNS: &str = "id, username, email, password_hash, first_name, last_name, \
     is_active, auth_version, date_joined, last_login";

#[derive(FromRow)]
struct UserRow {
    id: String,
    username: String,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    is_active: bool,
    auth_version: i64,
    date_joined: i64,
    last_login: Option<i64>,
}

impl TryFrom<UserRow> for User {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(User {
            id: parse_uuid("users.id", &row.id)?,
            username: row.username,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            is_active: row.is_active,
            auth_version: row.auth_version,
            date_joined: parse_timestamp("users.date_joined", row.date_joined)?,
            last_login: row
                .last_login
                .map(|secs| parse_timestamp("users.last_login", secs))
                .transpose()?,
        })
    }
}

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                INSERT INTO users (
                    id, username, email, password_hash, first_name, last_name,
                    is_active, auth_version, date_joined, last_login
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(user.id.to_string())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.is_active)
        .bind(user.auth_version)
        .bind(user.date_joined.timestamp())
        .bind(user.last_login.map(|dt| dt.timestamp()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {} FROM users WHERE id = ?", USER_COLUMNS))
                .bind(id.to_string())
                .fetch_optional(&self.pool)
                .await?;

        row.map(User::try_from).transpose()
    }

    pub async fn find_by_username(&self, username: &str) -> DbErrorResult<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(&format!(
            "SELECT {} FROM users WHERE username = ?",
            USER_COLUMNS
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::try_from).transpose()
    }

    /// Whether another account already uses `username`
    pub async fn username_taken(
        &self,
        username: &str,
        excluding: Option<Uuid>,
    ) -> DbErrorResult<bool> {
        let excluded = excluding.map(|id| id.to_string()).unwrap_or_default();

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = ? AND id != ?")
                .bind(username)
                .bind(excluded)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }

    /// Save the editable account fields inside the caller's transaction
    pub async fn update_in_tx(
        tx: &mut Transaction<'_, Sqlite>,
        user: &User,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE users
                SET username = ?, email = ?, first_name = ?, last_name = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(user.id.to_string())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }

    /// Store a new password hash together with its auth version
    pub async fn update_password(
        &self,
        id: Uuid,
        password_hash: &str,
        auth_version: i64,
    ) -> DbErrorResult<()> {
        sqlx::query("UPDATE users SET password_hash = ?, auth_version = ? WHERE id = ?")
            .bind(password_hash)
            .bind(auth_version)
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    pub async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> DbErrorResult<()> {
        sqlx::query("UPDATE users SET last_login = ? WHERE id = ?")
            .bind(at.timestamp())
            .bind(id.to_string())
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
