use crate::api::error::AppError;
use crate::media::MEDIA_URL_PREFIX;
use crate::request_logging::log_requests;
use crate::{
    AppState, edit, edit_page, health, login, login_page, logout, password_change,
    password_change_page, profile, register, signup_page,
};

use acct_config::SessionConfig;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::Uri,
    middleware,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_sessions::{Expiry, SessionManagerLayer, SessionStore, cookie::SameSite};

/// Room for the text fields and multipart framing around an upload
const BODY_LIMIT_HEADROOM: usize = 1024 * 1024;

/// Uploads up to this many times the per-file limit are read and reported
/// as a form error; larger bodies are refused outright with 413.
const BODY_LIMIT_UPLOAD_FACTOR: usize = 4;

/// Build the application router with all endpoints
pub fn build_router<S>(state: AppState, session_store: S, session: &SessionConfig) -> Router
where
    S: SessionStore + Clone,
{
    let session_layer = SessionManagerLayer::new(session_store)
        .with_name(session.cookie_name.clone())
        .with_secure(session.secure_cookie)
        .with_same_site(SameSite::Lax)
        .with_http_only(true)
        .with_expiry(Expiry::OnInactivity(time::Duration::days(
            session.inactivity_days,
        )));

    let body_limit =
        state.profile_limits.max_upload_bytes * BODY_LIMIT_UPLOAD_FACTOR + BODY_LIMIT_HEADROOM;
    let media = ServeDir::new(state.media.root());

    Router::new()
        // Accounts
        .route("/account/signup", get(signup_page).post(register))
        .route("/account/login", get(login_page).post(login))
        .route("/account/logout", post(logout))
        .route(
            "/account/password_change",
            get(password_change_page).post(password_change),
        )
        // Profile
        .route("/account/profile", get(profile))
        .route("/account/profile/edit", get(edit_page).post(edit))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Uploaded files
        .nest_service(MEDIA_URL_PREFIX, media)
        .fallback(not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(session_layer)
        .layer(middleware::from_fn(log_requests))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}
