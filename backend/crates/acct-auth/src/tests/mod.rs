
use crate::hash_password;

use acct_core::User;
use acct_db::UserRepository;

use std::sync::Arc;

use tower_sessions::{MemoryStore, Session};

/// Fresh session backed by an in-memory store
fn test_session() -> Session {
    Session::new(None, Arc::new(MemoryStore::default()), None)
}

/// Repository over a migrated in-memory database
async fn test_users() -> UserRepository {
    let pool = acct_db::connect_in_memory()
        .await
        .expect("Failed to create test pool");
    UserRepository::new(pool)
}

/// Persist a user whose password is `password`
async fn create_user(users: &UserRepository, username: &str, password: &str) -> User {
    let hash = hash_password(password).await.unwrap();
    let user = User::new(username.to_string(), format!("{}@example.com", username), hash);
    users.create(&user).await.unwrap();
    user
}
