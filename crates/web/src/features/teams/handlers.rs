use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::team::{CreateTeamRequest, JoinTeamRequest},
    models::{Team, TeamAnalysis},
};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/teams",
    responses(
        (status = 200, description = "Teams in the current profile", body = Vec<Team>)
    ),
    tag = "teams"
)]
pub async fn list_teams(State(state): State<AppState>) -> Json<Vec<Team>> {
    Json(services::list_teams(&state).await)
}

#[utoipa::path(
    get,
    path = "/api/hackathons/{id}/team",
    params(
        ("id" = i64, Path, description = "Hackathon id")
    ),
    responses(
        (status = 200, description = "The profile's team for this hackathon", body = Team),
        (status = 404, description = "Unknown hackathon or no team yet")
    ),
    tag = "teams"
)]
pub async fn get_hackathon_team(
    State(state): State<AppState>,
    Path(hackathon_id): Path<i64>,
) -> Result<Json<Team>, WebError> {
    let team = services::team_for_hackathon(&state, hackathon_id).await?;

    Ok(Json(team))
}

#[utoipa::path(
    post,
    path = "/api/hackathons/{id}/team",
    params(
        ("id" = i64, Path, description = "Hackathon id")
    ),
    request_body = CreateTeamRequest,
    responses(
        (status = 201, description = "Team created", body = Team),
        (status = 400, description = "Empty team name"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Hackathon not found")
    ),
    tag = "teams"
)]
pub async fn create_team(
    State(state): State<AppState>,
    Path(hackathon_id): Path<i64>,
    Json(req): Json<CreateTeamRequest>,
) -> Result<Response, WebError> {
    let team = services::create_team(&state, hackathon_id, &req.name).await?;

    Ok((StatusCode::CREATED, Json(team)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/hackathons/{id}/team/join",
    params(
        ("id" = i64, Path, description = "Hackathon id")
    ),
    request_body = JoinTeamRequest,
    responses(
        (status = 200, description = "Joined team", body = Team),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "No team with that code")
    ),
    tag = "teams"
)]
pub async fn join_team(
    State(state): State<AppState>,
    Path(hackathon_id): Path<i64>,
    Json(req): Json<JoinTeamRequest>,
) -> Result<Json<Team>, WebError> {
    let team = services::join_team(&state, hackathon_id, &req.code).await?;

    Ok(Json(team))
}

#[utoipa::path(
    post,
    path = "/api/teams/{id}/analysis",
    params(
        ("id" = i64, Path, description = "Team id")
    ),
    responses(
        (status = 200, description = "Team balance analysis", body = TeamAnalysis),
        (status = 404, description = "Team not found"),
        (status = 409, description = "An analysis for this team is already running"),
        (status = 502, description = "Analysis service failed")
    ),
    tag = "teams"
)]
pub async fn analyze_team(
    State(state): State<AppState>,
    Path(team_id): Path<i64>,
) -> Result<Json<TeamAnalysis>, WebError> {
    let analysis = services::analyze_team(&state, team_id).await?;

    Ok(Json(analysis))
}
