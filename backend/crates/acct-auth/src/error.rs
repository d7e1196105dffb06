use acct_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hashing failed: {message} {location}")]
    Hash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session error: {source} {location}")]
    Session {
        #[source]
        source: tower_sessions::session::Error,
        location: ErrorLocation,
    },

    #[error("Database error: {source} {location}")]
    Db {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },
}

impl From<tower_sessions::session::Error> for AuthError {
    #[track_caller]
    fn from(source: tower_sessions::session::Error) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for AuthError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Db {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
