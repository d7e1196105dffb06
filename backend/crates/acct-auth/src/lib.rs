pub mod backend;
pub mod error;
pub mod password;
pub mod session;

pub use backend::authenticate;
pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use session::{
    SESSION_AUTH_VERSION_KEY, SESSION_USER_ID_KEY, SessionAuth, change_password, login, logout,
    session_auth, update_session_auth_version,
};

#[cfg(test)]
mod tests;
