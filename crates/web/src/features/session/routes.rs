use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{get_session, oauth_sign_in, sign_out, sign_up, toggle_theme};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_session).delete(sign_out))
        .route("/signup", post(sign_up))
        .route("/oauth", post(oauth_sign_in))
        .route("/theme/toggle", post(toggle_theme))
}
