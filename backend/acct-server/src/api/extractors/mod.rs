pub mod current_user;
pub mod form_submission;
