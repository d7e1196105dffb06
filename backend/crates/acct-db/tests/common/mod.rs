#![allow(dead_code)]

mod fixtures;

pub use fixtures::{create_test_user, test_user};
pub use test_db::{count_profiles, create_test_pool};
