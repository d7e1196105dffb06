pub mod login;
pub mod password_change;
pub mod signup;
