pub mod account_edit;
pub mod profile_repository;
pub mod user_repository;

use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use uuid::Uuid;

#[track_caller]
fn parse_uuid(column: &'static str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::InvalidRow {
        column,
        message: format!("Invalid UUID '{}': {}", value, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[track_caller]
fn parse_timestamp(column: &'static str, secs: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| DbError::InvalidRow {
        column,
        message: format!("Timestamp out of range: {}", secs),
        location: ErrorLocation::from(Location::caller()),
    })
}
