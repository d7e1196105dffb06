pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod media;
pub mod request_logging;
pub mod routes;
pub mod state;
pub mod templates;


pub use api::{
    accounts::{
        login::{login, login_page, logout},
        password_change::{password_change, password_change_page},
        signup::{register, signup_page},
    },
    error::AppError,
    error::Result as AppResult,
    extractors::{current_user::CurrentUser, form_submission::FormSubmission},
    messages::{Level, Message},
    views::profile::{edit, edit_page, profile},
};
pub use error::{Result as ServerResult, ServerError};
pub use media::MediaStorage;
pub use routes::build_router;
pub use state::AppState;
pub use templates::Templates;
