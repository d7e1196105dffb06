/// Default minimum password length
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;

/// Attributes shorter than this are not compared against the password
const MIN_SIMILARITY_LENGTH: usize = 3;

const COMMON_PASSWORDS: &[&str] = &[
    "00000000",
    "11111111",
    "12345678",
    "123456789",
    "1234567890",
    "abc12345",
    "admin123",
    "baseball",
    "changeme",
    "dragon12",
    "football",
    "iloveyou",
    "letmein1",
    "master123",
    "monkey123",
    "passw0rd",
    "password",
    "password1",
    "password123",
    "princess",
    "qwerty123",
    "qwertyuiop",
    "sunshine",
    "trustno1",
    "welcome1",
];

/// Strength rules applied to new passwords
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordPolicy {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    /// Every rule `password` breaks, in a stable order
    pub fn check(&self, password: &str, username: &str, email: &str) -> Vec<String> {
        let mut problems = Vec::new();
        let lowered = password.to_lowercase();

        let email_local = email.split('@').next().unwrap_or_default();
        let similar_to = [
            (username, "username"),
            (email_local, "email address"),
        ];
        if let Some((_, label)) = similar_to
            .iter()
            .find(|(value, _)| Self::is_similar(&lowered, value))
        {
            problems.push(format!("The password is too similar to the {}.", label));
        }

        if password.chars().count() < self.min_length {
            problems.push(format!(
                "This password is too short. It must contain at least {} characters.",
                self.min_length
            ));
        }

        if COMMON_PASSWORDS.contains(&lowered.trim()) {
            problems.push(String::from("This password is too common."));
        }

        if !password.is_empty() && password.chars().all(|c| c.is_ascii_digit()) {
            problems.push(String::from("This password is entirely numeric."));
        }

        problems
    }

    fn is_similar(lowered_password: &str, attribute: &str) -> bool {
        let attribute = attribute.trim().to_lowercase();
        if attribute.chars().count() < MIN_SIMILARITY_LENGTH
            || lowered_password.chars().count() < MIN_SIMILARITY_LENGTH
        {
            return false;
        }
        lowered_password.contains(&attribute) || attribute.contains(lowered_password)
    }
}
