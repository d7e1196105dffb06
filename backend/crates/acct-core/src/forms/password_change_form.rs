use crate::forms::signup_form::PASSWORD_MISMATCH;
use crate::forms::validators;
use crate::{FormData, FormErrors, PasswordPolicy, User};

use serde::Serialize;

pub const INCORRECT_OLD_PASSWORD: &str =
    "Your old password was entered incorrectly. Please enter it again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Old password plus the new one entered twice.
/// Verifying the old password needs the hasher, so callers do it separately.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PasswordChangeForm {
    #[serde(skip)]
    old_password: String,
    #[serde(skip)]
    new_password1: String,
    #[serde(skip)]
    new_password2: String,
    pub errors: FormErrors,
}

impl PasswordChangeForm {
    pub fn bind(data: &FormData) -> Self {
        Self {
            old_password: data.raw("old_password"),
            new_password1: data.raw("new_password1"),
            new_password2: data.raw("new_password2"),
            errors: FormErrors::new(),
        }
    }

    pub fn old_password(&self) -> &str {
        &self.old_password
    }

    pub fn clean(&self, policy: &PasswordPolicy, user: &User) -> Result<PasswordChange, FormErrors> {
        let mut errors = FormErrors::new();

        errors.check("old_password", validators::required(&self.old_password));
        errors.check("new_password1", validators::required(&self.new_password1));
        errors.check("new_password2", validators::required(&self.new_password2));

        if !self.new_password1.is_empty() && !self.new_password2.is_empty() {
            if self.new_password1 != self.new_password2 {
                errors.add("new_password2", PASSWORD_MISMATCH);
            } else {
                for problem in policy.check(&self.new_password2, &user.username, &user.email) {
                    errors.add("new_password2", problem);
                }
            }
        }

        errors.into_result(PasswordChange {
            old_password: self.old_password.clone(),
            new_password: self.new_password1.clone(),
        })
    }

    pub fn with_errors(mut self, errors: FormErrors) -> Self {
        self.errors.extend(errors);
        self
    }
}
