use axum::{Json, extract::State, http::StatusCode};
use storage::{
    dto::{
        session::{SessionResponse, ThemeResponse},
        signup::SignupRequest,
    },
    models::User,
};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/session",
    responses(
        (status = 200, description = "Signed-in user (if any) and theme", body = SessionResponse)
    ),
    tag = "session"
)]
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(services::current_session(&state).await)
}

#[utoipa::path(
    post,
    path = "/api/session/signup",
    request_body = SignupRequest,
    responses(
        (status = 200, description = "Signed in as the new user", body = User)
    ),
    tag = "session"
)]
pub async fn sign_up(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<User>, WebError> {
    let user = services::sign_up(&state, req).await?;

    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/session/oauth",
    responses(
        (status = 200, description = "Signed in as a sample user", body = User)
    ),
    tag = "session"
)]
pub async fn oauth_sign_in(State(state): State<AppState>) -> Result<Json<User>, WebError> {
    let user = services::oauth_sign_in(&state).await?;

    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 204, description = "Signed out; teams cleared")
    ),
    tag = "session"
)]
pub async fn sign_out(State(state): State<AppState>) -> Result<StatusCode, WebError> {
    services::sign_out(&state).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/session/theme/toggle",
    responses(
        (status = 200, description = "New theme", body = ThemeResponse)
    ),
    tag = "session"
)]
pub async fn toggle_theme(State(state): State<AppState>) -> Result<Json<ThemeResponse>, WebError> {
    let theme = services::toggle_theme(&state).await?;

    Ok(Json(theme))
}
