//! Profile repository.
//!
//! ## One profile per user
//!
//! `profiles.user_id` is UNIQUE. [`ProfileRepository::get_or_create`] inserts
//! with `ON CONFLICT(user_id) DO NOTHING` and then reads the row back, so
//! concurrent first visits still end up sharing a single profile.

use super::{parse_timestamp, parse_uuid};
use crate::{DbError, Result as DbErrorResult};

use acct_core::{City, Profile};

use std::panic::Location;
use std::str::FromStr;

use chrono::Utc;
use error_location::ErrorLocation;
use sqlx::{FromRow, Sqlite, SqlitePool, Transaction};
use uuid::Uuid;

#[derive(FromRow)]
struct ProfileRow {
    id: String,
    user_id: String,
    city: Option<String>,
    phone_number: String,
    image: Option<String>,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DbError;

    fn try_from(row: ProfileRow) -> DbErrorResult<Self> {
        let city = row
            .city
            .map(|key| {
                City::from_str(&key).map_err(|e| DbError::InvalidRow {
                    column: "profiles.city",
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                })
            })
            .transpose()?;

        Ok(Profile {
            id: parse_uuid("profiles.id", &row.id)?,
            user_id: parse_uuid("profiles.user_id", &row.user_id)?,
            city,
            phone_number: row.phone_number,
            image: row.image,
            created_at: parse_timestamp("profiles.created_at", row.created_at)?,
            updated_at: parse_timestamp("profiles.updated_at", row.updated_at)?,
        })
    }
}

pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Return the user's profile, creating an empty one if absent.
    /// The flag is true when this call created it.
    pub async fn get_or_create(&self, user_id: Uuid) -> DbErrorResult<(Profile, bool)> {
        let fresh = Profile::new(user_id);

        let result = sqlx::query(
            r#"
                INSERT INTO profiles (
                    id, user_id, city, phone_number, image, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                ON CONFLICT(user_id) DO NOTHING
            "#,
        )
        .bind(fresh.id.to_string())
        .bind(user_id.to_string())
        .bind(fresh.city.map(|city| city.as_str()))
        .bind(&fresh.phone_number)
        .bind(&fresh.image)
        .bind(fresh.created_at.timestamp())
        .bind(fresh.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        let created = result.rows_affected() == 1;

        let profile = self
            .find_by_user_id(user_id)
            .await?
            .ok_or_else(|| DbError::from(sqlx::Error::RowNotFound))?;

        if created {
            log::info!("Created profile {} for user {}", profile.id, user_id);
        }

        Ok((profile, created))
    }

    pub async fn find_by_user_id(&self, user_id: Uuid) -> DbErrorResult<Option<Profile>> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
                SELECT id, user_id, city, phone_number, image, created_at, updated_at
                FROM profiles
                WHERE user_id = ?
            "#,
        )
        .bind(user_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }

    /// Save city, phone number and image inside the caller's transaction
    pub async fn update_in_tx(
        tx: &mut Transaction<'_, Sqlite>,
        profile: &Profile,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
                UPDATE profiles
                SET user_id = ?, city = ?, phone_number = ?, image = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(profile.user_id.to_string())
        .bind(profile.city.map(|city| city.as_str()))
        .bind(&profile.phone_number)
        .bind(&profile.image)
        .bind(Utc::now().timestamp())
        .bind(profile.id.to_string())
        .execute(&mut **tx)
        .await?;

        Ok(())
    }
}
