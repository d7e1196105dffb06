pub mod form_data;
pub mod form_errors;
pub mod image_kind;
pub mod login_form;
pub mod password_change_form;
pub mod password_policy;
pub mod profile_form;
pub mod signup_form;
pub mod user_form;
pub mod validators;
