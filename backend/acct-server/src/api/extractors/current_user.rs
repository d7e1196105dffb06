//! Login-required extractor.

use crate::{AppError, AppState};

use acct_auth::{logout, session_auth};
use acct_core::User;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

/// The logged-in user of this request.
///
/// Rejects with a redirect to the login form when the session has no user,
/// the user is gone or inactive, or the password changed since the session
/// was opened. Stale sessions are flushed on the way out.
pub struct CurrentUser {
    pub user: User,
    pub session: Session,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let session = Session::from_request_parts(parts, state)
                .await
                .map_err(|(_, message)| AppError::internal(message))?;

            let next = parts
                .uri
                .path_and_query()
                .map(|pq| pq.as_str().to_string())
                .unwrap_or_else(|| parts.uri.path().to_string());

            let Some(auth) = session_auth(&session).await? else {
                return Err(AppError::login_required(next));
            };

            match state.users().find_by_id(auth.user_id).await? {
                Some(user) if user.is_active && user.auth_version == auth.auth_version => {
                    Ok(CurrentUser { user, session })
                }
                _ => {
                    log::info!("Discarding stale session for user {}", auth.user_id);
                    logout(&session).await?;
                    Err(AppError::login_required(next))
                }
            }
        }
    }
}
