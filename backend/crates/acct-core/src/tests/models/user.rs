use crate::{Profile, User};

use googletest::prelude::*;

#[test]
fn given_new_user_then_active_with_first_auth_version() {
    let user = User::new("alice".into(), "a@b.com".into(), "hash".into());

    assert_that!(user.is_active, eq(true));
    assert_that!(user.auth_version, eq(1));
    assert_that!(user.last_login, none());
    assert_that!(user.first_name.as_str(), eq(""));
}

#[test]
fn given_new_profile_then_empty_and_owned_by_user() {
    let user = User::new("alice".into(), String::new(), "hash".into());
    let profile = Profile::new(user.id);

    assert_that!(profile.user_id, eq(user.id));
    assert_that!(profile.city, none());
    assert_that!(profile.phone_number.as_str(), eq(""));
    assert_that!(profile.image, none());
}
