use crate::{FormData, PasswordChangeForm, PasswordPolicy, User};

use googletest::prelude::*;

fn user() -> User {
    User::new("alice".into(), "alice@example.com".into(), "hash".into())
}

#[test]
fn given_matching_strong_passwords_when_clean_then_change() {
    let data = FormData::from_pairs([
        ("old_password", "Secret123"),
        ("new_password1", "Brand-new-pass9"),
        ("new_password2", "Brand-new-pass9"),
    ]);
    let form = PasswordChangeForm::bind(&data);

    let change = form.clean(&PasswordPolicy::default(), &user()).unwrap();

    assert_that!(form.old_password(), eq("Secret123"));
    assert_that!(change.new_password.as_str(), eq("Brand-new-pass9"));
}

#[test]
fn given_mismatch_when_clean_then_error_on_new_password2() {
    let data = FormData::from_pairs([
        ("old_password", "Secret123"),
        ("new_password1", "Brand-new-pass9"),
        ("new_password2", "Brand-new-pass8"),
    ]);

    let errors = PasswordChangeForm::bind(&data)
        .clean(&PasswordPolicy::default(), &user())
        .unwrap_err();

    assert_that!(errors.has("new_password2"), eq(true));
}

#[test]
fn given_password_containing_username_when_clean_then_similarity_error() {
    let data = FormData::from_pairs([
        ("old_password", "Secret123"),
        ("new_password1", "alice-rocks-2026"),
        ("new_password2", "alice-rocks-2026"),
    ]);

    let errors = PasswordChangeForm::bind(&data)
        .clean(&PasswordPolicy::default(), &user())
        .unwrap_err();

    assert_that!(
        errors.field("new_password2")[0].as_str(),
        eq("The password is too similar to the username.")
    );
}
