use crate::PasswordPolicy;

use googletest::prelude::*;

#[test]
fn given_reasonable_password_when_check_then_no_problems() {
    let problems = PasswordPolicy::default().check("Secret123", "alice", "a@b.com");

    assert_that!(problems, is_empty());
}

#[test]
fn given_short_password_when_check_then_too_short() {
    let problems = PasswordPolicy::new(10).check("Secret123", "alice", "");

    assert_that!(
        problems,
        elements_are![eq("This password is too short. It must contain at least 10 characters.")]
    );
}

#[test]
fn given_common_password_when_check_then_too_common() {
    let problems = PasswordPolicy::default().check("PASSWORD", "bob", "");

    assert_that!(problems, elements_are![eq("This password is too common.")]);
}

#[test]
fn given_numeric_password_when_check_then_entirely_numeric() {
    let problems = PasswordPolicy::default().check("908172635", "bob", "");

    assert_that!(problems, elements_are![eq("This password is entirely numeric.")]);
}

#[test]
fn given_password_built_from_email_when_check_then_too_similar() {
    let problems = PasswordPolicy::default().check("Jonathan2026", "jb", "jonathan@example.com");

    assert_that!(
        problems,
        elements_are![eq("The password is too similar to the email address.")]
    );
}

#[test]
fn given_short_attributes_when_check_then_similarity_skipped() {
    let problems = PasswordPolicy::default().check("ab-cd-ef-gh", "ab", "a@b.com");

    assert_that!(problems, is_empty());
}
