use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Skill-gap verdict for one team against one hackathon.
///
/// Field names on the wire match the completion service's output contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeamAnalysis {
    /// Nominally 0..=100. Not clamped: the local heuristic goes negative past five gaps.
    pub score: f64,
    pub summary: String,
    pub missing_skills: Vec<String>,
    pub suggestions: String,
}
