use std::collections::HashSet;
use std::time::Duration;

use storage::models::{Hackathon, Team, TeamAnalysis};

use super::{AnalysisMode, CompletionBackend, CompletionRequest};
use crate::config::DEFAULT_LOCAL_LATENCY_MS;
use crate::error::BackendError;

pub const HEURISTIC_SUMMARY: &str =
    "Strong backend and AI skills, but lacks a dedicated front-end designer.";
pub const HEURISTIC_SUGGESTIONS: &str = "Recruit a team member with strong UI/UX and design skills to create a polished user interface. Familiarity with Firebase would also be beneficial for rapid prototyping.";
/// Reported when nothing is missing. Fixed flavor text, not derived from the inputs.
pub const PLACEHOLDER_MISSING_SKILL: &str = "UI/UX Design";
pub const POINTS_PER_MISSING_SKILL: f64 = 20.0;

/// Required skills no member has, in requirement order, each listed once.
pub fn missing_skills<'a>(team: &Team, hackathon: &'a Hackathon) -> Vec<&'a str> {
    let current: HashSet<&str> = team.all_skills().collect();
    let mut seen = HashSet::new();

    hackathon
        .required_skills
        .iter()
        .map(String::as_str)
        .filter(|skill| !current.contains(skill) && seen.insert(*skill))
        .collect()
}

/// Deterministic set-difference scoring used when no completion service is configured.
pub fn heuristic_analysis(team: &Team, hackathon: &Hackathon) -> TeamAnalysis {
    let missing = missing_skills(team, hackathon);
    let score = 100.0 - POINTS_PER_MISSING_SKILL * missing.len() as f64;

    let missing_skills = if missing.is_empty() {
        vec![PLACEHOLDER_MISSING_SKILL.to_string()]
    } else {
        missing.into_iter().map(String::from).collect()
    };

    TeamAnalysis {
        score,
        summary: HEURISTIC_SUMMARY.to_string(),
        missing_skills,
        suggestions: HEURISTIC_SUGGESTIONS.to_string(),
    }
}

/// Local stand-in for the completion service.
///
/// Waits `latency` before answering so the interaction feels the same as a
/// remote call.
pub struct HeuristicBackend {
    latency: Duration,
}

impl HeuristicBackend {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl Default for HeuristicBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_LOCAL_LATENCY_MS))
    }
}

#[async_trait::async_trait]
impl CompletionBackend for HeuristicBackend {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, BackendError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let analysis = heuristic_analysis(request.team, request.hackathon);
        Ok(serde_json::to_string(&analysis)?)
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Heuristic
    }
}
