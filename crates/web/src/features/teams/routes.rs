use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::handlers::{analyze_team, create_team, get_hackathon_team, join_team, list_teams};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams))
        .route("/:id/analysis", post(analyze_team))
}

/// Team routes scoped under `/hackathons`
pub fn hackathon_routes() -> Router<AppState> {
    Router::new()
        .route("/:id/team", get(get_hackathon_team).post(create_team))
        .route("/:id/team/join", post(join_team))
}
