//! Session-backed login state.
//!
//! A logged-in session carries the user's id and the `auth_version` it was
//! opened with. Changing the password bumps the stored version, which makes
//! every other session stale while [`change_password`] re-stamps the current one.

use crate::{Result as AuthErrorResult, hash_password};

use acct_core::User;
use acct_db::UserRepository;

use chrono::Utc;
use tower_sessions::Session;
use uuid::Uuid;

pub const SESSION_USER_ID_KEY: &str = "user_id";
pub const SESSION_AUTH_VERSION_KEY: &str = "auth_version";

/// What a session claims about its user; still needs checking against storage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionAuth {
    pub user_id: Uuid,
    pub auth_version: i64,
}

/// Attach `user` to the session under a fresh session id and stamp `last_login`
pub async fn login(session: &Session, users: &UserRepository, user: &User) -> AuthErrorResult<()> {
    session.cycle_id().await?;
    session
        .insert(SESSION_USER_ID_KEY, user.id.to_string())
        .await?;
    session
        .insert(SESSION_AUTH_VERSION_KEY, user.auth_version)
        .await?;

    users.touch_last_login(user.id, Utc::now()).await?;

    log::info!("User '{}' logged in", user.username);

    Ok(())
}

/// Drop all session data and the session id
pub async fn logout(session: &Session) -> AuthErrorResult<()> {
    session.flush().await?;
    Ok(())
}

/// Read the login claim. Malformed values count as logged out.
pub async fn session_auth(session: &Session) -> AuthErrorResult<Option<SessionAuth>> {
    let Some(user_id) = session.get::<String>(SESSION_USER_ID_KEY).await? else {
        return Ok(None);
    };
    let Some(auth_version) = session.get::<i64>(SESSION_AUTH_VERSION_KEY).await? else {
        return Ok(None);
    };

    match Uuid::parse_str(&user_id) {
        Ok(user_id) => Ok(Some(SessionAuth {
            user_id,
            auth_version,
        })),
        Err(e) => {
            log::warn!("Ignoring malformed session user id '{}': {}", user_id, e);
            Ok(None)
        }
    }
}

/// Keep `session` logged in after `user`'s password changed
pub async fn update_session_auth_version(session: &Session, user: &User) -> AuthErrorResult<()> {
    session.cycle_id().await?;
    session
        .insert(SESSION_AUTH_VERSION_KEY, user.auth_version)
        .await?;
    Ok(())
}

/// Store a new password for `user`, invalidating every other session.
/// Returns the updated user.
pub async fn change_password(
    session: &Session,
    users: &UserRepository,
    mut user: User,
    new_password: &str,
) -> AuthErrorResult<User> {
    user.password_hash = hash_password(new_password).await?;
    user.auth_version += 1;

    users
        .update_password(user.id, &user.password_hash, user.auth_version)
        .await?;
    update_session_auth_version(session, &user).await?;

    log::info!("Password changed for user '{}'", user.username);

    Ok(user)
}
