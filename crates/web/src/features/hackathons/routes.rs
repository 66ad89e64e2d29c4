use axum::{Router, routing::get};

use crate::state::AppState;

use super::handlers::{get_hackathon, list_hackathons};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_hackathons))
        .route("/:id", get(get_hackathon))
}
