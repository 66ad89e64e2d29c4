use utoipa::OpenApi;

use crate::features::{hackathons, session, teams};

#[derive(OpenApi)]
#[openapi(
    paths(
        hackathons::handlers::list_hackathons,
        hackathons::handlers::get_hackathon,
        session::handlers::get_session,
        session::handlers::sign_up,
        session::handlers::oauth_sign_in,
        session::handlers::sign_out,
        session::handlers::toggle_theme,
        teams::handlers::list_teams,
        teams::handlers::get_hackathon_team,
        teams::handlers::create_team,
        teams::handlers::join_team,
        teams::handlers::analyze_team,
    ),
    components(
        schemas(
            storage::dto::hackathon::HackathonFilter,
            storage::dto::session::SessionResponse,
            storage::dto::session::ThemeResponse,
            storage::dto::signup::SignupRequest,
            storage::dto::team::CreateTeamRequest,
            storage::dto::team::JoinTeamRequest,
            storage::models::Hackathon,
            storage::models::HackathonStatus,
            storage::models::Team,
            storage::models::TeamAnalysis,
            storage::models::Theme,
            storage::models::User,
        )
    ),
    tags(
        (name = "hackathons", description = "Hackathon catalog"),
        (name = "session", description = "Sign-in state and theme preference"),
        (name = "teams", description = "Team management and balance analysis"),
    )
)]
pub struct ApiDoc;
