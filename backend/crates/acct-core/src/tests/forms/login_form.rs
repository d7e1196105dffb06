use crate::{FormData, LoginForm};

use googletest::prelude::*;

#[test]
fn given_username_and_password_when_clean_then_credentials() {
    let data = FormData::from_pairs([("username", " alice "), ("password", "Secret123")]);

    let credentials = LoginForm::bind(&data).clean().unwrap();

    assert_that!(credentials.username.as_str(), eq("alice"));
    assert_that!(credentials.password.as_str(), eq("Secret123"));
}

#[test]
fn given_missing_password_when_clean_then_required_error() {
    let data = FormData::from_pairs([("username", "alice")]);

    let errors = LoginForm::bind(&data).clean().unwrap_err();

    assert_that!(errors.has("password"), eq(true));
    assert_that!(errors.has("username"), eq(false));
}
