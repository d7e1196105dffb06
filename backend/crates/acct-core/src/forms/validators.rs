//! Field validators shared by the forms.
//!
//! Each returns the user-facing message on failure.

use crate::{MAX_EMAIL_LENGTH, MAX_NAME_LENGTH, REQUIRED_FIELD};

use validator::ValidateEmail;

const USERNAME_PUNCTUATION: &str = "@.+-_";
const PHONE_PUNCTUATION: &str = " +-()";
const MIN_PHONE_DIGITS: usize = 7;

pub fn required(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Err(REQUIRED_FIELD.to_string());
    }
    Ok(())
}

pub fn max_length(value: &str, max: usize) -> Result<(), String> {
    let count = value.chars().count();
    if count > max {
        return Err(format!(
            "Ensure this value has at most {} characters (it has {}).",
            max, count
        ));
    }
    Ok(())
}

pub fn username(value: &str) -> Result<(), String> {
    required(value)?;
    max_length(value, MAX_NAME_LENGTH)?;

    if !value
        .chars()
        .all(|c| c.is_alphanumeric() || USERNAME_PUNCTUATION.contains(c))
    {
        return Err(String::from(
            "Enter a valid username. This value may contain only letters, numbers, and @/./+/-/_ characters.",
        ));
    }
    Ok(())
}

/// Optional e-mail address; blank is accepted.
///
/// The domain must carry a top-level label, so `user@localhost` is refused.
pub fn email(value: &str) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    max_length(value, MAX_EMAIL_LENGTH)?;

    let has_tld = value
        .rsplit_once('@')
        .is_some_and(|(_, domain)| domain.contains('.'));
    if !value.validate_email() || !has_tld {
        return Err(String::from("Enter a valid email address."));
    }
    Ok(())
}

/// Optional phone number in the format the input widget accepts
pub fn phone_number(value: &str, max: usize) -> Result<(), String> {
    if value.is_empty() {
        return Ok(());
    }
    max_length(value, max)?;

    let invalid = || {
        String::from("Enter a valid phone number (digits, spaces, and + - ( ) only).")
    };

    if !value
        .chars()
        .all(|c| c.is_ascii_digit() || PHONE_PUNCTUATION.contains(c))
    {
        return Err(invalid());
    }
    if value.char_indices().any(|(i, c)| c == '+' && i != 0) {
        return Err(invalid());
    }
    if value.chars().filter(char::is_ascii_digit).count() < MIN_PHONE_DIGITS {
        return Err(invalid());
    }
    Ok(())
}
