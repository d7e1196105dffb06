use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated on {table}.{column} {location}")]
    UniqueViolation {
        table: String,
        column: String,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid stored value in {column}: {message} {location}")]
    InvalidRow {
        column: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    /// True when a unique constraint on `column` rejected the write
    pub fn is_unique_violation_on(&self, column: &str) -> bool {
        matches!(self, Self::UniqueViolation { column: c, .. } if c == column)
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());

        // SQLite reports "UNIQUE constraint failed: users.username"
        if let sqlx::Error::Database(db_error) = &source
            && db_error.is_unique_violation()
            && let Some((_, target)) = db_error.message().split_once(": ")
            && let Some((table, column)) = target.split_once('.')
        {
            return Self::UniqueViolation {
                table: table.to_string(),
                column: column.trim().to_string(),
                location,
            };
        }

        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
