//! Account registration form.

use crate::forms::validators;
use crate::{FormData, FormErrors, PasswordPolicy};

use serde::Serialize;

pub const PASSWORD_MISMATCH: &str = "The two password fields didn't match.";

/// Validated signup data. The password is still plaintext.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Username, e-mail and a password entered twice.
/// Passwords are never serialized back into a re-rendered form.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    #[serde(skip)]
    password1: String,
    #[serde(skip)]
    password2: String,
    pub errors: FormErrors,
}

impl SignupForm {
    pub fn bind(data: &FormData) -> Self {
        Self {
            username: data.text("username"),
            email: data.text("email"),
            password1: data.raw("password1"),
            password2: data.raw("password2"),
            errors: FormErrors::new(),
        }
    }

    pub fn clean(&self, policy: &PasswordPolicy) -> Result<NewUser, FormErrors> {
        let mut errors = FormErrors::new();

        errors.check("username", validators::username(&self.username));
        errors.check("email", validators::email(&self.email));
        errors.check("password1", validators::required(&self.password1));
        errors.check("password2", validators::required(&self.password2));

        if !self.password1.is_empty() && !self.password2.is_empty() {
            if self.password1 != self.password2 {
                errors.add("password2", PASSWORD_MISMATCH);
            } else {
                for problem in policy.check(&self.password2, &self.username, &self.email) {
                    errors.add("password2", problem);
                }
            }
        }

        errors.into_result(NewUser {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password1.clone(),
        })
    }

    pub fn with_errors(mut self, errors: FormErrors) -> Self {
        self.errors.extend(errors);
        self
    }
}
