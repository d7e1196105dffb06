//! Combined account and profile save used by the profile editor.

use super::profile_repository::ProfileRepository;
use super::user_repository::UserRepository;
use crate::Result as DbErrorResult;

use acct_core::{Profile, User};

use sqlx::SqlitePool;

/// Save both records or neither.
///
/// Any failure drops the transaction before commit, which rolls back the
/// user row written first.
pub async fn save_user_and_profile(
    pool: &SqlitePool,
    user: &User,
    profile: &Profile,
) -> DbErrorResult<()> {
    let mut tx = pool.begin().await?;
    UserRepository::update_in_tx(&mut tx, user).await?;
    ProfileRepository::update_in_tx(&mut tx, profile).await?;
    tx.commit().await?;

    Ok(())
}
