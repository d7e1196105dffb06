use crate::{FormData, User, UserForm};

use googletest::prelude::*;

fn existing_user() -> User {
    let mut user = User::new("alice".into(), "a@b.com".into(), "hash".into());
    user.first_name = "Alice".into();
    user
}

#[test]
fn given_user_when_from_user_then_prepopulated_and_unbound() {
    let user = existing_user();

    let form = UserForm::from_user(&user);

    assert_that!(form.username.as_str(), eq("alice"));
    assert_that!(form.email.as_str(), eq("a@b.com"));
    assert_that!(form.first_name.as_str(), eq("Alice"));
    assert_that!(form.errors.is_empty(), eq(true));
}

#[test]
fn given_valid_submission_when_clean_and_apply_then_user_updated() {
    // Given
    let mut user = existing_user();
    let data = FormData::from_pairs([
        ("username", "alice2"),
        ("email", "alice@example.org"),
        ("first_name", "Alicia"),
        ("last_name", "Liddell"),
    ]);

    // When
    let changes = UserForm::bind(&data).clean().unwrap();
    changes.apply_to(&mut user);

    // Then
    assert_that!(user.username.as_str(), eq("alice2"));
    assert_that!(user.email.as_str(), eq("alice@example.org"));
    assert_that!(user.first_name.as_str(), eq("Alicia"));
    assert_that!(user.last_name.as_str(), eq("Liddell"));
}

#[test]
fn given_missing_names_when_clean_then_names_become_blank() {
    let mut user = existing_user();
    let data = FormData::from_pairs([("username", "alice")]);

    UserForm::bind(&data).clean().unwrap().apply_to(&mut user);

    assert_that!(user.first_name.as_str(), eq(""));
    assert_that!(user.email.as_str(), eq(""));
}

#[test]
fn given_overlong_last_name_when_clean_then_error() {
    let long_name = "x".repeat(151);
    let data = FormData::from_pairs([("username", "alice"), ("last_name", long_name.as_str())]);

    let errors = UserForm::bind(&data).clean().unwrap_err();

    assert_that!(
        errors.field("last_name")[0].as_str(),
        eq("Ensure this value has at most 150 characters (it has 151).")
    );
}

#[test]
fn given_blank_username_when_clean_then_required_error() {
    let data = FormData::from_pairs([("username", "   ")]);

    let errors = UserForm::bind(&data).clean().unwrap_err();

    assert_that!(errors.has("username"), eq(true));
}
