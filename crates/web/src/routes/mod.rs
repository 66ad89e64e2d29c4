use axum::{Json, Router, routing::get};
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;

use crate::features::{hackathons, session, teams};
use crate::openapi::ApiDoc;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(std::time::Duration::from_secs(3600));

    let api = Router::new()
        .nest(
            "/hackathons",
            hackathons::routes::routes().merge(teams::routes::hackathon_routes()),
        )
        .nest("/teams", teams::routes::routes())
        .nest("/session", session::routes::routes());

    Router::new()
        .nest("/api", api)
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .layer(cors)
        .with_state(state)
}
