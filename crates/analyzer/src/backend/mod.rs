pub mod gemini;
pub mod heuristic;

pub use gemini::GeminiClient;
pub use heuristic::HeuristicBackend;

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use storage::models::{Hackathon, Team};

use crate::error::BackendError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// An external completion service grades the team.
    Delegated,
    /// Local set-difference scoring, used when no API key is configured.
    Heuristic,
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Delegated => write!(f, "delegated"),
            Self::Heuristic => write!(f, "heuristic"),
        }
    }
}

/// Everything a backend may need to produce one analysis.
///
/// Remote backends only read the prompt, schema and temperature. The local
/// heuristic reads the team and hackathon directly.
#[derive(Debug, Clone)]
pub struct CompletionRequest<'a> {
    pub prompt: String,
    pub schema: Value,
    pub temperature: f32,
    pub team: &'a Team,
    pub hackathon: &'a Hackathon,
}

/// A source of analysis text matching the response schema.
#[async_trait::async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String, BackendError>;

    fn name(&self) -> &'static str;

    /// Delegated backends have their reported gaps checked against the team.
    fn mode(&self) -> AnalysisMode;
}
