pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::pool::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::account_edit::save_user_and_profile;
pub use repositories::profile_repository::ProfileRepository;
pub use repositories::user_repository::UserRepository;
