use crate::FormErrors;

use googletest::prelude::*;

#[test]
fn given_no_errors_when_into_result_then_ok() {
    let errors = FormErrors::new();

    assert_eq!(errors.into_result(7).unwrap(), 7);
}

#[test]
fn given_field_error_when_into_result_then_err_with_message() {
    let mut errors = FormErrors::new();
    errors.check("email", Err("bad".to_string()));
    errors.check("username", Ok(()));

    let errors = errors.into_result(()).unwrap_err();

    assert_that!(errors.field("email").to_vec(), elements_are![eq("bad")]);
    assert_that!(errors.field("username").is_empty(), eq(true));
}

#[test]
fn given_two_error_sets_when_extend_then_messages_accumulate() {
    let mut first = FormErrors::new();
    first.add("phone_number", "one");
    let mut second = FormErrors::new();
    second.add("phone_number", "two");
    second.add_non_field("form-wide");

    first.extend(second);

    assert_that!(first.field("phone_number").len(), eq(2));
    assert_that!(first.non_field().to_vec(), elements_are![eq("form-wide")]);
}
