pub mod accounts;
pub mod error;
pub mod extractors;
pub mod messages;
pub mod views;

pub const PROFILE_PATH: &str = "/account/profile";
pub const LOGIN_PATH: &str = "/account/login";
