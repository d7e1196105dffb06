//! Password change for the logged-in user.

use crate::api::PROFILE_PATH;
use crate::api::messages::{Level, add_message};
use crate::{AppResult, AppState, CurrentUser, FormSubmission};

use acct_auth::{change_password, verify_password};
use acct_core::PasswordChangeForm;
use acct_core::forms::password_change_form::INCORRECT_OLD_PASSWORD;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use tera::Context;

pub const PASSWORD_CHANGED: &str = "Your password was successfully updated!";

/// GET /account/password_change
pub async fn password_change_page(
    State(state): State<AppState>,
    _current: CurrentUser,
) -> AppResult<Html<String>> {
    render_password_change(&state, &PasswordChangeForm::default())
}

/// POST /account/password_change
///
/// Every other session of the user is logged out; this one stays valid.
pub async fn password_change(
    State(state): State<AppState>,
    CurrentUser { user, session }: CurrentUser,
    FormSubmission(data): FormSubmission,
) -> AppResult<Response> {
    let form = PasswordChangeForm::bind(&data);
    let cleaned = form.clean(&state.password_policy, &user);

    let mut errors = cleaned.as_ref().err().cloned().unwrap_or_default();
    if !form.old_password().is_empty()
        && !verify_password(form.old_password(), &user.password_hash).await?
    {
        errors.add("old_password", INCORRECT_OLD_PASSWORD);
    }

    let change = match cleaned {
        Ok(change) if errors.is_empty() => change,
        _ => return Ok(render_password_change(&state, &form.with_errors(errors))?.into_response()),
    };

    let users = state.users();
    change_password(&session, &users, user, &change.new_password).await?;
    add_message(&session, Level::Success, PASSWORD_CHANGED).await?;

    Ok(Redirect::to(PROFILE_PATH).into_response())
}

fn render_password_change(state: &AppState, form: &PasswordChangeForm) -> AppResult<Html<String>> {
    let mut context = Context::new();
    context.insert("form", form);
    state
        .templates
        .render("registration/password_change_form.html", &context)
}
