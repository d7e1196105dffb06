//! Profile page and the combined account/profile editor.

use crate::api::PROFILE_PATH;
use crate::api::messages::{Level, Message, add_message, take_messages};
use crate::templates::city_choices;
use crate::{AppResult, AppState, CurrentUser, FormSubmission};

use acct_core::{FormErrors, ProfileForm, USERNAME_TAKEN, UserForm};
use acct_db::save_user_and_profile;

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
};
use tera::Context;

pub const EDIT_FAILED: &str = "Error updating your profile";

/// GET /account/profile
///
/// Read-only. The profile is created on first visit.
pub async fn profile(
    State(state): State<AppState>,
    CurrentUser { user, session }: CurrentUser,
) -> AppResult<Html<String>> {
    let (profile, _) = state.profiles().get_or_create(user.id).await?;
    let messages = take_messages(&session).await?;

    let mut context = Context::new();
    context.insert("profile", &profile);
    context.insert("user", &user);
    context.insert("messages", &messages);
    state.templates.render("account/profile.html", &context)
}

/// GET /account/profile/edit
pub async fn edit_page(
    State(state): State<AppState>,
    CurrentUser { user, session }: CurrentUser,
) -> AppResult<Html<String>> {
    let (profile, _) = state.profiles().get_or_create(user.id).await?;
    let messages = take_messages(&session).await?;

    render_edit(
        &state,
        &UserForm::from_user(&user),
        &ProfileForm::from_profile(&profile),
        &messages,
    )
}

/// POST /account/profile/edit
///
/// Both forms are validated on every submission so both report their errors.
/// Nothing is stored unless both are valid; the two saves share a transaction.
pub async fn edit(
    State(state): State<AppState>,
    CurrentUser { mut user, session }: CurrentUser,
    FormSubmission(data): FormSubmission,
) -> AppResult<Response> {
    let (mut profile, _) = state.profiles().get_or_create(user.id).await?;

    let userform = UserForm::bind(&data);
    let profileform = ProfileForm::bind(&data, &profile);

    let mut user_result = userform.clean();
    if let Ok(changes) = &user_result
        && changes.username != user.username
        && state
            .users()
            .username_taken(&changes.username, Some(user.id))
            .await?
    {
        user_result = Err(FormErrors::for_field("username", USERNAME_TAKEN));
    }
    let profile_result = profileform.clean(&state.profile_limits);

    let (user_changes, profile_changes) = match (user_result, profile_result) {
        (Ok(user_changes), Ok(profile_changes)) => (user_changes, profile_changes),
        (user_result, profile_result) => {
            return reject_edit(
                &state,
                &session,
                userform.with_errors(user_result.err().unwrap_or_default()),
                profileform.with_errors(profile_result.err().unwrap_or_default()),
            )
            .await;
        }
    };

    let new_image = match &profile_changes.image {
        Some(image) => Some(state.media.save_profile_picture(image).await?),
        None => None,
    };

    user_changes.apply_to(&mut user);
    profile.city = profile_changes.city;
    profile.phone_number = profile_changes.phone_number;
    if let Some(path) = &new_image {
        profile.image = Some(path.clone());
    }
    profile.user_id = user.id;

    if let Err(e) = save_user_and_profile(&state.pool, &user, &profile).await {
        if let Some(path) = &new_image
            && let Err(remove_error) = state.media.remove(path).await
        {
            log::warn!("Failed to remove orphaned upload {}: {}", path, remove_error);
        }

        if e.is_unique_violation_on("username") {
            return reject_edit(
                &state,
                &session,
                userform.with_errors(FormErrors::for_field("username", USERNAME_TAKEN)),
                profileform,
            )
            .await;
        }
        return Err(e.into());
    }

    log::info!("Updated account and profile of user '{}'", user.username);

    Ok(Redirect::to(PROFILE_PATH).into_response())
}

async fn reject_edit(
    state: &AppState,
    session: &tower_sessions::Session,
    userform: UserForm,
    profileform: ProfileForm,
) -> AppResult<Response> {
    add_message(session, Level::Error, EDIT_FAILED).await?;
    let messages = take_messages(session).await?;

    Ok(render_edit(state, &userform, &profileform, &messages)?.into_response())
}

fn render_edit(
    state: &AppState,
    userform: &UserForm,
    profileform: &ProfileForm,
    messages: &[Message],
) -> AppResult<Html<String>> {
    let mut context = Context::new();
    context.insert("userform", userform);
    context.insert("profileform", profileform);
    context.insert("messages", messages);
    context.insert("cities", &city_choices());
    state.templates.render("account/profile_edit.html", &context)
}
