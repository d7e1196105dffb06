use crate::{Result as AuthErrorResult, hash_password, verify_password};

use acct_core::{Credentials, User};
use acct_db::UserRepository;

/// Resolve credentials to an active user.
///
/// Unknown usernames still pay for one hash so response time does not reveal
/// which accounts exist. Inactive accounts are rejected like a wrong password.
pub async fn authenticate(
    users: &UserRepository,
    credentials: &Credentials,
) -> AuthErrorResult<Option<User>> {
    let Some(user) = users.find_by_username(&credentials.username).await? else {
        hash_password(&credentials.password).await?;
        log::debug!("Login attempt for unknown user '{}'", credentials.username);
        return Ok(None);
    };

    if !verify_password(&credentials.password, &user.password_hash).await? {
        log::debug!("Wrong password for user '{}'", user.username);
        return Ok(None);
    }

    if !user.is_active {
        log::info!("Rejected login for inactive user '{}'", user.username);
        return Ok(None);
    }

    Ok(Some(user))
}
