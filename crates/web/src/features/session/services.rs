use storage::{
    dto::{
        session::{SessionResponse, ThemeResponse},
        signup::SignupRequest,
    },
    models::User,
};

use crate::error::{WebError, WebResult};
use crate::state::AppState;

pub async fn current_session(state: &AppState) -> SessionResponse {
    let profile = state.profile.lock().await;
    SessionResponse {
        user: profile.current_user().cloned(),
        theme: profile.theme(),
    }
}

pub async fn sign_up(state: &AppState, req: SignupRequest) -> WebResult<User> {
    let user = req.into_new_user();
    let mut profile = state.profile.lock().await;
    Ok(profile.sign_in(user).await?.clone())
}

/// Simulated OAuth: signs in as one of the catalog's sample users.
pub async fn oauth_sign_in(state: &AppState) -> WebResult<User> {
    let user = state
        .catalog
        .random_sample_user()
        .cloned()
        .ok_or_else(|| WebError::NotFound("No sample users available".to_string()))?;

    let mut profile = state.profile.lock().await;
    Ok(profile.sign_in(user).await?.clone())
}

pub async fn sign_out(state: &AppState) -> WebResult<()> {
    state.profile.lock().await.sign_out().await?;
    Ok(())
}

pub async fn toggle_theme(state: &AppState) -> WebResult<ThemeResponse> {
    let theme = state.profile.lock().await.toggle_theme().await?;
    Ok(ThemeResponse { theme })
}
