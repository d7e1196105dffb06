//! Login and logout.

use crate::api::{LOGIN_PATH, PROFILE_PATH};
use crate::{AppResult, AppState, FormSubmission};

use acct_auth::authenticate;
use acct_core::forms::login_form::INVALID_LOGIN;
use acct_core::{FormErrors, LoginForm};

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tera::Context;
use tower_sessions::Session;

#[derive(Debug, Default, Deserialize)]
pub struct NextQuery {
    pub next: Option<String>,
}

/// GET /account/login
pub async fn login_page(
    State(state): State<AppState>,
    Query(query): Query<NextQuery>,
) -> AppResult<Html<String>> {
    render_login(&state, &LoginForm::default(), query.next.as_deref())
}

/// POST /account/login
///
/// `next` comes from the hidden form field, else from the query string.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<NextQuery>,
    FormSubmission(data): FormSubmission,
) -> AppResult<Response> {
    let form = LoginForm::bind(&data);
    let next = data
        .get("next")
        .map(str::to_string)
        .filter(|next| !next.is_empty())
        .or(query.next);

    let credentials = match form.clean() {
        Ok(credentials) => credentials,
        Err(errors) => return reject_login(&state, form, errors, next.as_deref()),
    };

    let users = state.users();
    let Some(user) = authenticate(&users, &credentials).await? else {
        let mut errors = FormErrors::new();
        errors.add_non_field(INVALID_LOGIN);
        return reject_login(&state, form, errors, next.as_deref());
    };

    acct_auth::login(&session, &users, &user).await?;

    Ok(Redirect::to(safe_redirect_target(next.as_deref())).into_response())
}

/// POST /account/logout
pub async fn logout(session: Session) -> AppResult<Redirect> {
    acct_auth::logout(&session).await?;
    Ok(Redirect::to(LOGIN_PATH))
}

/// `next` when it is a path on this site, else the profile page.
/// Rejects absolute and scheme-relative URLs (`//host`, `/\host`).
pub fn safe_redirect_target(next: Option<&str>) -> &str {
    match next {
        Some(next)
            if next.starts_with('/')
                && !next.starts_with("//")
                && !next.starts_with("/\\")
                && !next.chars().any(char::is_control) =>
        {
            next
        }
        _ => PROFILE_PATH,
    }
}

fn reject_login(
    state: &AppState,
    form: LoginForm,
    errors: FormErrors,
    next: Option<&str>,
) -> AppResult<Response> {
    Ok(render_login(state, &form.with_errors(errors), next)?.into_response())
}

fn render_login(state: &AppState, form: &LoginForm, next: Option<&str>) -> AppResult<Html<String>> {
    let mut context = Context::new();
    context.insert("form", form);
    context.insert("next", &next.unwrap_or_default());
    state.templates.render("registration/login.html", &context)
}
