//! Request-level errors.
//!
//! Form validation failures never come through here; they are re-rendered
//! with their field errors. These are the cases that abort a request.

use crate::api::LOGIN_PATH;

use acct_auth::AuthError;
use acct_db::DbError;

use std::error::Error as StdError;
use std::panic::Location;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// No such page (404)
    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Unreadable submission (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Anonymous access to a protected page; redirects to the login form
    #[error("Login required for {next} {location}")]
    LoginRequired {
        next: String,
        location: ErrorLocation,
    },

    /// Anything else (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl AppError {
    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn login_required(next: impl Into<String>) -> Self {
        Self::LoginRequired {
            next: next.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// `/account/login?next=<path>`, percent-encoded
pub fn login_url(next: &str) -> String {
    match serde_urlencoded::to_string([("next", next)]) {
        Ok(query) => format!("{}?{}", LOGIN_PATH, query),
        Err(_) => LOGIN_PATH.to_string(),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::LoginRequired { next, .. } => {
                log::debug!("Redirecting anonymous request for {} to login", next);
                Redirect::to(&login_url(&next)).into_response()
            }
            AppError::NotFound { .. } => {
                log::warn!("{}", self);
                (StatusCode::NOT_FOUND, "Not Found").into_response()
            }
            AppError::BadRequest { .. } => {
                log::warn!("{}", self);
                (StatusCode::BAD_REQUEST, "Bad Request").into_response()
            }
            // Details stay in the log
            AppError::Internal { .. } => {
                log::error!("{}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

impl From<DbError> for AppError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        AppError::Internal {
            message: format!("Database operation failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for AppError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal {
            message: format!("Database operation failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<AuthError> for AppError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        AppError::Internal {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tower_sessions::session::Error> for AppError {
    #[track_caller]
    fn from(e: tower_sessions::session::Error) -> Self {
        AppError::Internal {
            message: format!("Session error: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<tera::Error> for AppError {
    #[track_caller]
    fn from(e: tera::Error) -> Self {
        // tera keeps the useful part in the source chain
        let mut message = e.to_string();
        let mut source = StdError::source(&e);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = StdError::source(cause);
        }

        AppError::Internal {
            message: format!("Template rendering failed: {}", message),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<std::io::Error> for AppError {
    #[track_caller]
    fn from(e: std::io::Error) -> Self {
        AppError::Internal {
            message: format!("IO error: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<axum::extract::multipart::MultipartError> for AppError {
    #[track_caller]
    fn from(e: axum::extract::multipart::MultipartError) -> Self {
        AppError::BadRequest {
            message: format!("Malformed multipart body: {}", e.body_text()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
