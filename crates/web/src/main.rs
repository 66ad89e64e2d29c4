use analyzer::{AnalyzerConfig, TeamBalanceAnalyzer};
use anyhow::Context;
use storage::{HackathonCatalog, JsonStore, Profile};

mod config;
mod error;
mod features;
mod openapi;
mod routes;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting HackMatch API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let analyzer = TeamBalanceAnalyzer::from_config(&AnalyzerConfig::from_env())
        .context("Failed to initialize team analyzer")?;
    tracing::info!(
        "Team analyzer ready (mode: {}, backend: {})",
        analyzer.mode(),
        analyzer.backend_name()
    );

    tracing::info!("Loading profile from {}", config.data_dir.display());
    let profile = Profile::load(JsonStore::new(config.data_dir.clone())).await;

    let state = AppState::new(analyzer, HackathonCatalog::builtin(), profile);
    let app = routes::router(state);

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "OpenAPI document available at http://{}/api-docs/openapi.json",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
