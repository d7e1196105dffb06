use acct_core::User;
use acct_db::UserRepository;

use sqlx::SqlitePool;

/// Creates a test User (not persisted)
pub fn test_user(username: &str) -> User {
    User::new(
        username.to_string(),
        format!("{}@example.com", username),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2g".to_string(),
    )
}

/// Persists a test User and returns it
pub async fn create_test_user(pool: &SqlitePool, username: &str) -> User {
    let user = test_user(username);
    UserRepository::new(pool.clone())
        .create(&user)
        .await
        .expect("Failed to create test user");
    user
}
