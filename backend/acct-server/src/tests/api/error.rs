use crate::AppError;
use crate::api::error::login_url;

use axum::response::IntoResponse;
use googletest::prelude::*;
use http::{StatusCode, header::LOCATION};
use http_body_util::BodyExt;

#[test]
fn given_path_with_query_when_building_login_url_then_next_is_percent_encoded() {
    // Given
    let next = "/account/profile/edit?tab=1";

    // When
    let url = login_url(next);

    // Then
    assert_that!(
        url.as_str(),
        eq("/account/login?next=%2Faccount%2Fprofile%2Fedit%3Ftab%3D1")
    );
}

#[tokio::test]
async fn given_login_required_when_converted_then_redirects_to_login_with_next() {
    // Given
    let error = AppError::login_required("/account/profile");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(LOCATION).unwrap(),
        "/account/login?next=%2Faccount%2Fprofile"
    );
}

#[tokio::test]
async fn given_internal_error_when_converted_then_500_without_details() {
    // Given
    let error = AppError::internal("database exploded at /secret/path");

    // When
    let response = error.into_response();

    // Then
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let text = String::from_utf8(body.to_vec()).unwrap();
    assert_that!(text.as_str(), eq("Internal Server Error"));
}

#[tokio::test]
async fn test_not_found_returns_404() {
    let response = AppError::not_found("No route for /nope").into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_bad_request_returns_400() {
    let response = AppError::bad_request("Malformed multipart body").into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[test]
fn given_db_error_when_converted_then_internal() {
    // Given
    let db_error = acct_db::DbError::from(sqlx::Error::RowNotFound);

    // When
    let error = AppError::from(db_error);

    // Then
    assert_that!(matches!(error, AppError::Internal { .. }), eq(true));
}
