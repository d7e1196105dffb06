use crate::forms::validators;
use crate::{FormData, FormErrors};

use serde::Serialize;

/// Shown for unknown users, wrong passwords and inactive accounts alike
pub const INVALID_LOGIN: &str = "Please enter a correct username and password. \
     Note that both fields may be case-sensitive.";

/// Username and password to authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct LoginForm {
    pub username: String,
    #[serde(skip)]
    password: String,
    pub errors: FormErrors,
}

impl LoginForm {
    pub fn bind(data: &FormData) -> Self {
        Self {
            username: data.text("username"),
            password: data.raw("password"),
            errors: FormErrors::new(),
        }
    }

    pub fn clean(&self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::new();

        errors.check("username", validators::required(&self.username));
        errors.check("password", validators::required(&self.password));

        errors.into_result(Credentials {
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    pub fn with_errors(mut self, errors: FormErrors) -> Self {
        self.errors.extend(errors);
        self
    }
}
