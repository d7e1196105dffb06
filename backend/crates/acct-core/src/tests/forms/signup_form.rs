use crate::{FormData, PasswordPolicy, SignupForm};

use googletest::prelude::*;

fn signup_data(username: &str, email: &str, password1: &str, password2: &str) -> FormData {
    FormData::from_pairs([
        ("username", username),
        ("email", email),
        ("password1", password1),
        ("password2", password2),
    ])
}

#[test]
fn given_valid_submission_when_clean_then_returns_new_user() {
    // Given
    let form = SignupForm::bind(&signup_data("alice", "a@b.com", "Secret123", "Secret123"));

    // When
    let result = form.clean(&PasswordPolicy::default());

    // Then
    assert_that!(result, ok(anything()));
    let new_user = result.unwrap();
    assert_that!(new_user.username.as_str(), eq("alice"));
    assert_that!(new_user.email.as_str(), eq("a@b.com"));
    assert_that!(new_user.password.as_str(), eq("Secret123"));
}

#[test]
fn given_surrounding_whitespace_when_bind_then_username_trimmed_but_password_kept() {
    let form = SignupForm::bind(&signup_data("  alice ", "", " Secret123 ", " Secret123 "));

    let new_user = form.clean(&PasswordPolicy::default()).unwrap();

    assert_that!(new_user.username.as_str(), eq("alice"));
    assert_that!(new_user.password.as_str(), eq(" Secret123 "));
}

#[test]
fn given_blank_email_when_clean_then_ok() {
    let form = SignupForm::bind(&signup_data("alice", "", "Secret123", "Secret123"));

    assert_that!(form.clean(&PasswordPolicy::default()), ok(anything()));
}

#[test]
fn given_mismatched_passwords_when_clean_then_error_on_password2() {
    let form = SignupForm::bind(&signup_data("alice", "a@b.com", "Secret123", "Secret124"));

    let errors = form.clean(&PasswordPolicy::default()).unwrap_err();

    assert_that!(errors.has("password2"), eq(true));
    assert_that!(errors.has("password1"), eq(false));
    assert_that!(
        errors.field("password2")[0].as_str(),
        eq("The two password fields didn't match.")
    );
}

#[test]
fn given_empty_submission_when_clean_then_required_errors() {
    let form = SignupForm::bind(&FormData::new());

    let errors = form.clean(&PasswordPolicy::default()).unwrap_err();

    for field in ["username", "password1", "password2"] {
        assert_that!(
            errors.field(field)[0].as_str(),
            eq("This field is required.")
        );
    }
    assert_that!(errors.has("email"), eq(false));
}

#[test]
fn given_weak_password_when_clean_then_policy_errors_on_password2() {
    let form = SignupForm::bind(&signup_data("alice", "", "1234", "1234"));

    let errors = form.clean(&PasswordPolicy::default()).unwrap_err();

    assert_that!(errors.field("password2").len(), eq(2));
}

#[test]
fn given_invalid_username_and_email_when_clean_then_both_reported() {
    let form = SignupForm::bind(&signup_data("al ice!", "not-an-email", "Secret123", "Secret123"));

    let errors = form.clean(&PasswordPolicy::default()).unwrap_err();

    assert_that!(errors.has("username"), eq(true));
    assert_that!(errors.has("email"), eq(true));
    assert_that!(errors.has("password2"), eq(false));
}

#[test]
fn given_errors_when_with_errors_then_form_keeps_values_and_errors() {
    let form = SignupForm::bind(&signup_data("alice", "a@b.com", "x", "y"));
    let errors = form.clean(&PasswordPolicy::default()).unwrap_err();

    let form = form.with_errors(errors);

    assert_that!(form.username.as_str(), eq("alice"));
    assert_that!(form.errors.is_empty(), eq(false));
}
