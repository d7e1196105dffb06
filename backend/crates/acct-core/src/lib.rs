pub mod error;
pub mod forms;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use forms::form_data::{FormData, UploadedFile};
pub use forms::form_errors::FormErrors;
pub use forms::image_kind::ImageKind;
pub use forms::login_form::{Credentials, LoginForm};
pub use forms::password_change_form::{PasswordChange, PasswordChangeForm};
pub use forms::password_policy::PasswordPolicy;
pub use forms::profile_form::{ImageUpload, ProfileChanges, ProfileForm, ProfileLimits};
pub use forms::signup_form::{NewUser, SignupForm};
pub use forms::user_form::{UserChanges, UserForm};
pub use models::city::City;
pub use models::profile::Profile;
pub use models::user::User;

/// Maximum length of `username`, `first_name` and `last_name`
pub const MAX_NAME_LENGTH: usize = 150;

/// Maximum length of an e-mail address
pub const MAX_EMAIL_LENGTH: usize = 254;

pub const REQUIRED_FIELD: &str = "This field is required.";

/// Reported on `username` when another account already has it
pub const USERNAME_TAKEN: &str = "A user with that username already exists.";
