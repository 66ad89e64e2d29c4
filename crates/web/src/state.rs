use analyzer::{InFlightAnalyses, TeamBalanceAnalyzer};
use std::sync::Arc;
use storage::{HackathonCatalog, Profile};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<TeamBalanceAnalyzer>,
    pub catalog: Arc<HackathonCatalog>,
    pub profile: Arc<Mutex<Profile>>,
    pub in_flight: InFlightAnalyses,
}

impl AppState {
    pub fn new(analyzer: TeamBalanceAnalyzer, catalog: HackathonCatalog, profile: Profile) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            catalog: Arc::new(catalog),
            profile: Arc::new(Mutex::new(profile)),
            in_flight: InFlightAnalyses::new(),
        }
    }
}
