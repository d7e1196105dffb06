mod form_errors;
mod image_kind;
mod login_form;
mod password_change_form;
mod password_policy;
mod profile_form;
mod signup_form;
mod user_form;
mod validators;
