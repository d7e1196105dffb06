use crate::forms::validators;
use crate::{FormData, FormErrors, MAX_NAME_LENGTH, User};

use serde::Serialize;

/// Validated account fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserChanges {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserChanges {
    /// Copy the edited fields onto `user`
    pub fn apply_to(self, user: &mut User) {
        user.username = self.username;
        user.email = self.email;
        user.first_name = self.first_name;
        user.last_name = self.last_name;
    }
}

/// Editor for the account fields of an existing user
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub errors: FormErrors,
}

impl UserForm {
    /// Unbound form showing the stored values
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            errors: FormErrors::new(),
        }
    }

    /// Form bound to a submission. Absent fields are submitted as blank.
    pub fn bind(data: &FormData) -> Self {
        Self {
            username: data.text("username"),
            email: data.text("email"),
            first_name: data.text("first_name"),
            last_name: data.text("last_name"),
            errors: FormErrors::new(),
        }
    }

    pub fn clean(&self) -> Result<UserChanges, FormErrors> {
        let mut errors = FormErrors::new();

        errors.check("username", validators::username(&self.username));
        errors.check("email", validators::email(&self.email));
        errors.check(
            "first_name",
            validators::max_length(&self.first_name, MAX_NAME_LENGTH),
        );
        errors.check(
            "last_name",
            validators::max_length(&self.last_name, MAX_NAME_LENGTH),
        );

        errors.into_result(UserChanges {
            username: self.username.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
        })
    }

    pub fn with_errors(mut self, errors: FormErrors) -> Self {
        self.errors.extend(errors);
        self
    }
}
