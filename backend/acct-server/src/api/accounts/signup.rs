//! Account registration.

use crate::api::PROFILE_PATH;
use crate::{AppResult, AppState, FormSubmission};

use acct_auth::{authenticate, hash_password};
use acct_core::{Credentials, FormErrors, SignupForm, USERNAME_TAKEN, User};

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use tera::Context;
use tower_sessions::Session;

/// GET /account/signup
pub async fn signup_page(State(state): State<AppState>) -> AppResult<Html<String>> {
    render_signup(&state, &SignupForm::default())
}

/// POST /account/signup
///
/// Creates the account, logs it in and sends the browser to its profile.
/// An invalid submission is shown again with its errors and creates nothing.
pub async fn register(
    State(state): State<AppState>,
    session: Session,
    FormSubmission(data): FormSubmission,
) -> AppResult<Response> {
    let form = SignupForm::bind(&data);

    let new_user = match form.clean(&state.password_policy) {
        Ok(new_user) => new_user,
        Err(errors) => return reject_signup(&state, form, errors),
    };

    let users = state.users();

    if users.username_taken(&new_user.username, None).await? {
        return reject_signup(&state, form, FormErrors::for_field("username", USERNAME_TAKEN));
    }

    let password_hash = hash_password(&new_user.password).await?;
    let user = User::new(new_user.username.clone(), new_user.email.clone(), password_hash);

    match users.create(&user).await {
        // Lost a race against another signup for the same name
        Err(e) if e.is_unique_violation_on("username") => {
            return reject_signup(&state, form, FormErrors::for_field("username", USERNAME_TAKEN));
        }
        result => result?,
    }

    log::info!("Registered user '{}' ({})", user.username, user.id);

    let credentials = Credentials {
        username: new_user.username,
        password: new_user.password,
    };
    let Some(user) = authenticate(&users, &credentials).await? else {
        return Err(crate::AppError::internal(
            "Newly registered user failed to authenticate",
        ));
    };
    acct_auth::login(&session, &users, &user).await?;

    Ok(Redirect::to(PROFILE_PATH).into_response())
}

fn reject_signup(state: &AppState, form: SignupForm, errors: FormErrors) -> AppResult<Response> {
    Ok(render_signup(state, &form.with_errors(errors))?.into_response())
}

fn render_signup(state: &AppState, form: &SignupForm) -> AppResult<Html<String>> {
    let mut context = Context::new();
    context.insert("form", form);
    state.templates.render("registration/signup.html", &context)
}
