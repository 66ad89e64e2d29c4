use axum::{
    Json,
    extract::{Path, Query, State},
};
use storage::{dto::hackathon::HackathonFilter, models::Hackathon};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/hackathons",
    params(HackathonFilter),
    responses(
        (status = 200, description = "Hackathons retrieved successfully", body = Vec<Hackathon>),
        (status = 400, description = "Invalid status filter")
    ),
    tag = "hackathons"
)]
pub async fn list_hackathons(
    State(state): State<AppState>,
    Query(filter): Query<HackathonFilter>,
) -> Result<Json<Vec<Hackathon>>, WebError> {
    let status = filter.status().map_err(WebError::BadRequest)?;

    Ok(Json(services::list_hackathons(&state.catalog, status)))
}

#[utoipa::path(
    get,
    path = "/api/hackathons/{id}",
    params(
        ("id" = i64, Path, description = "Hackathon id")
    ),
    responses(
        (status = 200, description = "Hackathon found", body = Hackathon),
        (status = 404, description = "Hackathon not found")
    ),
    tag = "hackathons"
)]
pub async fn get_hackathon(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Hackathon>, WebError> {
    services::get_hackathon(&state.catalog, id)
        .map(Json)
        .ok_or_else(|| WebError::NotFound(format!("Hackathon {} not found", id)))
}
