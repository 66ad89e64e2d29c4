use storage::{
    StorageError,
    models::{Hackathon, Team, TeamAnalysis},
};

use crate::error::{WebError, WebResult};
use crate::state::AppState;

fn require_hackathon(state: &AppState, hackathon_id: i64) -> WebResult<Hackathon> {
    state
        .catalog
        .get(hackathon_id)
        .cloned()
        .ok_or_else(|| WebError::NotFound(format!("Hackathon {} not found", hackathon_id)))
}

pub async fn list_teams(state: &AppState) -> Vec<Team> {
    state.profile.lock().await.teams().to_vec()
}

pub async fn team_for_hackathon(state: &AppState, hackathon_id: i64) -> WebResult<Team> {
    require_hackathon(state, hackathon_id)?;

    let profile = state.profile.lock().await;
    profile
        .team_for_hackathon(hackathon_id)
        .cloned()
        .ok_or_else(|| WebError::NotFound(format!("No team for hackathon {}", hackathon_id)))
}

pub async fn create_team(state: &AppState, hackathon_id: i64, name: &str) -> WebResult<Team> {
    require_hackathon(state, hackathon_id)?;

    let mut profile = state.profile.lock().await;
    Ok(profile.create_team(hackathon_id, name).await?)
}

pub async fn join_team(state: &AppState, hackathon_id: i64, code: &str) -> WebResult<Team> {
    require_hackathon(state, hackathon_id)?;

    let mut profile = state.profile.lock().await;
    Ok(profile.join_team(hackathon_id, code).await?)
}

/// Runs one analysis for `team_id`. The profile lock is released before the
/// analyzer is awaited; the analyzer works on owned copies.
pub async fn analyze_team(state: &AppState, team_id: i64) -> WebResult<TeamAnalysis> {
    let team = {
        let profile = state.profile.lock().await;
        profile
            .team(team_id)
            .cloned()
            .ok_or(StorageError::TeamNotFound)?
    };
    let hackathon = require_hackathon(state, team.hackathon_id)?;

    let _guard = state.in_flight.try_acquire(team.id)?;
    Ok(state.analyzer.analyze(&team, &hackathon).await?)
}
