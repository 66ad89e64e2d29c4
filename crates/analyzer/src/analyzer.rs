use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

use storage::models::{Hackathon, Team, TeamAnalysis};

use crate::backend::{
    AnalysisMode, CompletionBackend, CompletionRequest, GeminiClient, HeuristicBackend,
};
use crate::config::AnalyzerConfig;
use crate::error::{AnalysisError, BackendError, Result};
use crate::prompts::{ANALYSIS_TEMPERATURE, PromptBuilder};

const REQUIRED_FIELDS: [&str; 4] = ["score", "summary", "missingSkills", "suggestions"];
const NON_EMPTY_TEXT_FIELDS: [&str; 2] = ["summary", "suggestions"];

/// Scores how well a team's combined skills cover a hackathon's requirements.
///
/// The backend is chosen once at construction and never changes. The
/// analyzer keeps no per-call state, so one instance can serve concurrent
/// requests for different teams.
pub struct TeamBalanceAnalyzer {
    backend: Arc<dyn CompletionBackend>,
    mode: AnalysisMode,
}

impl TeamBalanceAnalyzer {
    pub fn from_config(config: &AnalyzerConfig) -> std::result::Result<Self, BackendError> {
        let analyzer = match GeminiClient::from_config(config) {
            Some(client) => {
                let client = client?;
                info!("Team analysis delegated to Gemini ({})", client.model());
                Self::with_backend(Arc::new(client))
            }
            None => {
                info!(
                    "Team analysis runs locally ({} ms simulated latency)",
                    config.local_latency.as_millis()
                );
                Self::with_backend(Arc::new(HeuristicBackend::new(config.local_latency)))
            }
        };

        Ok(analyzer)
    }

    /// The mode is read from the backend once and fixed for this analyzer.
    pub fn with_backend(backend: Arc<dyn CompletionBackend>) -> Self {
        let mode = backend.mode();
        Self { backend, mode }
    }

    pub fn mode(&self) -> AnalysisMode {
        self.mode
    }

    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Produces a fresh analysis. Inputs are only borrowed, never modified.
    ///
    /// Every backend, transport or decode failure is logged here and surfaced
    /// as [`AnalysisError::Failed`].
    pub async fn analyze(&self, team: &Team, hackathon: &Hackathon) -> Result<TeamAnalysis> {
        match self.run(team, hackathon).await {
            Ok(analysis) => {
                info!(
                    team_id = team.id,
                    hackathon_id = hackathon.id,
                    mode = %self.mode,
                    "Team analysis complete: score {}, {} missing skill(s)",
                    analysis.score,
                    analysis.missing_skills.len()
                );
                Ok(analysis)
            }
            Err(e) => {
                error!(
                    team_id = team.id,
                    hackathon_id = hackathon.id,
                    backend = self.backend.name(),
                    "Error analyzing team balance: {}",
                    e
                );
                Err(AnalysisError::Failed)
            }
        }
    }

    async fn run(
        &self,
        team: &Team,
        hackathon: &Hackathon,
    ) -> std::result::Result<TeamAnalysis, BackendError> {
        let request = CompletionRequest {
            prompt: PromptBuilder::team_balance_prompt(team, hackathon),
            schema: PromptBuilder::response_schema(),
            temperature: ANALYSIS_TEMPERATURE,
            team,
            hackathon,
        };

        let text = self.backend.complete(&request).await?;
        let mut analysis = decode_analysis(&text)?;

        if self.mode == AnalysisMode::Delegated {
            restrict_to_gaps(&mut analysis, team, hackathon);
        }

        Ok(analysis)
    }
}

/// Decodes service output into a [`TeamAnalysis`].
///
/// A field counts as missing when absent or null, so `"score": 0` and an
/// empty `missingSkills` list are valid. Empty `summary` or `suggestions`
/// text is rejected.
pub fn decode_analysis(text: &str) -> std::result::Result<TeamAnalysis, BackendError> {
    let value: Value = serde_json::from_str(text.trim())?;

    let complete = REQUIRED_FIELDS
        .iter()
        .all(|field| value.get(field).is_some_and(|v| !v.is_null()));
    if !complete {
        return Err(BackendError::InvalidStructure);
    }

    let blank_text = NON_EMPTY_TEXT_FIELDS
        .iter()
        .any(|field| value.get(field).and_then(Value::as_str) == Some(""));
    if blank_text {
        return Err(BackendError::InvalidStructure);
    }

    Ok(serde_json::from_value(value)?)
}

/// Keeps only required skills no member has, first occurrence only.
fn restrict_to_gaps(analysis: &mut TeamAnalysis, team: &Team, hackathon: &Hackathon) {
    let before = analysis.missing_skills.len();
    let mut seen = HashSet::new();

    analysis.missing_skills.retain(|skill| {
        hackathon.required_skills.contains(skill) && !team.covers(skill) && seen.insert(skill.clone())
    });

    let dropped = before - analysis.missing_skills.len();
    if dropped > 0 {
        debug!(
            "Dropped {} reported missing skill(s) outside the team's actual gaps",
            dropped
        );
    }
}

impl fmt::Debug for TeamBalanceAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeamBalanceAnalyzer")
            .field("backend", &self.backend.name())
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ANALYSIS_FAILED_MESSAGE;
    use crate::test_support::{ScriptedBackend, hackathon, member, team};
    use std::time::Duration;

    fn delegated(backend: &Arc<ScriptedBackend>) -> TeamBalanceAnalyzer {
        TeamBalanceAnalyzer::with_backend(backend.clone())
    }

    fn heuristic() -> TeamBalanceAnalyzer {
        TeamBalanceAnalyzer::with_backend(Arc::new(HeuristicBackend::new(Duration::ZERO)))
    }

    #[test]
    fn test_mode_follows_api_key() {
        let without = AnalyzerConfig::from_lookup(|_| None);
        let with = AnalyzerConfig::from_lookup(|key| (key == "API_KEY").then(|| "k".to_string()));

        let local = TeamBalanceAnalyzer::from_config(&without).unwrap();
        let remote = TeamBalanceAnalyzer::from_config(&with).unwrap();

        assert_eq!(local.mode(), AnalysisMode::Heuristic);
        assert_eq!(local.backend_name(), "heuristic");
        assert_eq!(remote.mode(), AnalysisMode::Delegated);
        assert_eq!(remote.backend_name(), "gemini");
    }

    #[test]
    fn test_mode_comes_from_backend() {
        let gemini = GeminiClient::new("http://127.0.0.1:9", "m", "k", Duration::from_secs(1)).unwrap();

        assert_eq!(
            TeamBalanceAnalyzer::with_backend(Arc::new(gemini)).mode(),
            AnalysisMode::Delegated
        );
        assert_eq!(heuristic().mode(), AnalysisMode::Heuristic);
    }

    #[tokio::test]
    async fn test_mode_is_stable_across_calls() {
        let analyzer = heuristic();
        let team = team(1, "Byte Me", vec![member(1, "Ada", &["React"])]);
        let hackathon = hackathon(&["React"]);

        for _ in 0..3 {
            analyzer.analyze(&team, &hackathon).await.unwrap();
            assert_eq!(analyzer.mode(), AnalysisMode::Heuristic);
        }
    }

    #[tokio::test]
    async fn test_heuristic_mode_example() {
        let team = team(1, "Byte Me", vec![member(1, "Ada", &["React", "Node.js"])]);
        let hackathon = hackathon(&["React", "Figma", "MongoDB"]);

        let analysis = heuristic().analyze(&team, &hackathon).await.unwrap();

        assert_eq!(analysis.score, 60.0);
        assert_eq!(analysis.missing_skills, vec!["Figma", "MongoDB"]);
    }

    #[tokio::test]
    async fn test_heuristic_mode_keeps_placeholder() {
        let team = team(1, "Byte Me", vec![member(1, "Ada", &["React"])]);
        let hackathon = hackathon(&["React"]);

        let analysis = heuristic().analyze(&team, &hackathon).await.unwrap();

        assert_eq!(analysis.missing_skills, vec!["UI/UX Design"]);
    }

    #[tokio::test]
    async fn test_delegated_accepts_zero_score() {
        let backend = Arc::new(ScriptedBackend::replying(
            r#"{"score": 0, "summary": "No overlap at all.", "missingSkills": ["Figma"], "suggestions": "Recruit a designer."}"#,
        ));
        let team = team(1, "Byte Me", vec![member(1, "Ada", &["Cobol"])]);
        let hackathon = hackathon(&["Figma"]);

        let analysis = delegated(&backend).analyze(&team, &hackathon).await.unwrap();

        assert_eq!(analysis.score, 0.0);
        assert_eq!(analysis.summary, "No overlap at all.");
        assert_eq!(analysis.missing_skills, vec!["Figma"]);
    }

    #[tokio::test]
    async fn test_delegated_trims_whitespace() {
        let backend = Arc::new(ScriptedBackend::replying(
            "\n  {\"score\": 72.5, \"summary\": \"s\", \"missingSkills\": [], \"suggestions\": \"x\"}  \n",
        ));
        let team = team(1, "Byte Me", vec![member(1, "Ada", &["React"])]);
        let hackathon = hackathon(&["React"]);

        let analysis = delegated(&backend).analyze(&team, &hackathon).await.unwrap();

        assert_eq!(analysis.score, 72.5);
        assert!(analysis.missing_skills.is_empty());
    }

    #[tokio::test]
    async fn test_delegated_missing_field_is_normalized() {
        for body in [
            r#"{"score": 80, "summary": "s", "missingSkills": []}"#,
            r#"{"summary": "s", "missingSkills": [], "suggestions": "x"}"#,
            r#"{"score": null, "summary": "s", "missingSkills": [], "suggestions": "x"}"#,
            r#"{"score": 80, "summary": "s", "suggestions": "x"}"#,
        ] {
            let backend = Arc::new(ScriptedBackend::replying(body));
            let team = team(1, "Byte Me", vec![member(1, "Ada", &["React"])]);
            let hackathon = hackathon(&["React"]);

            let err = delegated(&backend)
                .analyze(&team, &hackathon)
                .await
                .unwrap_err();

            assert_eq!(err, AnalysisError::Failed);
            assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_delegated_empty_text_is_normalized() {
        for body in [
            r#"{"score": 50, "summary": "", "missingSkills": [], "suggestions": "x"}"#,
            r#"{"score": 50, "summary": "s", "missingSkills": [], "suggestions": ""}"#,
            r#"{"score": 50, "summary": "", "missingSkills": [], "suggestions": ""}"#,
        ] {
            let backend = Arc::new(ScriptedBackend::replying(body));
            let team = team(1, "Byte Me", vec![member(1, "Ada", &["React"])]);
            let hackathon = hackathon(&["React"]);

            let err = delegated(&backend)
                .analyze(&team, &hackathon)
                .await
                .unwrap_err();

            assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
        }
    }

    #[tokio::test]
    async fn test_delegated_invalid_json_is_normalized() {
        for body in ["Sure! Here is your analysis:", "", r#"{"score": "high", "summary": "s", "missingSkills": [], "suggestions": "x"}"#] {
            let backend = Arc::new(ScriptedBackend::replying(body));
            let team = team(1, "Byte Me", vec![member(1, "Ada", &["React"])]);
            let hackathon = hackathon(&["React"]);

            let err = delegated(&backend)
                .analyze(&team, &hackathon)
                .await
                .unwrap_err();

            assert_eq!(err, AnalysisError::Failed);
        }
    }

    #[tokio::test]
    async fn test_delegated_transport_failure_is_normalized() {
        let backend = Arc::new(ScriptedBackend::failing());
        let team = team(1, "Byte Me", vec![member(1, "Ada", &["React"])]);
        let hackathon = hackathon(&["React"]);

        let err = delegated(&backend)
            .analyze(&team, &hackathon)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), ANALYSIS_FAILED_MESSAGE);
        assert_eq!(backend.calls(), 1);
    }

    #[tokio::test]
    async fn test_delegated_sends_one_request_with_prompt() {
        let backend = Arc::new(ScriptedBackend::replying(
            r#"{"score": 90, "summary": "s", "missingSkills": [], "suggestions": "x"}"#,
        ));
        let team = team(
            1,
            "Byte Me",
            vec![
                member(1, "Ada", &["React", "Node.js"]),
                member(2, "Grace", &["React", "Python"]),
            ],
        );
        let hackathon = hackathon(&["React", "Python"]);

        delegated(&backend).analyze(&team, &hackathon).await.unwrap();

        assert_eq!(backend.calls(), 1);
        let prompt = backend.last_prompt().unwrap();
        assert!(prompt.contains("Combined Team Skills: React, Node.js, Python"));
        assert!(prompt.contains("Team Members: Ada, Grace"));
        assert_eq!(backend.last_temperature(), Some(ANALYSIS_TEMPERATURE));
    }

    #[tokio::test]
    async fn test_delegated_missing_skills_restricted_to_gaps() {
        let backend = Arc::new(ScriptedBackend::replying(
            r#"{"score": 50, "summary": "s", "missingSkills": ["Figma", "React", "Kubernetes", "Figma", "MongoDB"], "suggestions": "x"}"#,
        ));
        let team = team(1, "Byte Me", vec![member(1, "Ada", &["React"])]);
        let hackathon = hackathon(&["React", "Figma", "MongoDB"]);

        let analysis = delegated(&backend).analyze(&team, &hackathon).await.unwrap();

        assert_eq!(analysis.missing_skills, vec!["Figma", "MongoDB"]);
    }

    #[tokio::test]
    async fn test_inputs_are_not_mutated() {
        let team = team(
            1,
            "Byte Me",
            vec![member(1, "Ada", &["React", "React"]), member(2, "Grace", &[])],
        );
        let hackathon = hackathon(&["Figma", "React", "Figma"]);
        let team_before = team.clone();
        let hackathon_before = hackathon.clone();

        heuristic().analyze(&team, &hackathon).await.unwrap();
        let backend = Arc::new(ScriptedBackend::replying(
            r#"{"score": 10, "summary": "s", "missingSkills": ["Figma"], "suggestions": "x"}"#,
        ));
        delegated(&backend).analyze(&team, &hackathon).await.unwrap();

        assert_eq!(team, team_before);
        assert_eq!(hackathon, hackathon_before);
    }

    #[tokio::test]
    async fn test_concurrent_calls_are_independent() {
        let analyzer =
            TeamBalanceAnalyzer::with_backend(Arc::new(HeuristicBackend::new(Duration::from_millis(20))));
        let hackathon = hackathon(&["React", "Figma", "MongoDB"]);
        let designers = team(1, "Designers", vec![member(1, "Chloe", &["Figma"])]);
        let backend_team = team(
            2,
            "Backend",
            vec![member(2, "Bob", &["MongoDB"]), member(3, "Ada", &["React"])],
        );

        let (first, second) = tokio::join!(
            analyzer.analyze(&designers, &hackathon),
            analyzer.analyze(&backend_team, &hackathon)
        );

        let first = first.unwrap();
        let second = second.unwrap();
        assert_eq!(first.missing_skills, vec!["React", "MongoDB"]);
        assert_eq!(first.score, 60.0);
        assert_eq!(second.missing_skills, vec!["Figma"]);
        assert_eq!(second.score, 80.0);
    }

    #[test]
    fn test_decode_reports_invalid_structure() {
        let result = decode_analysis(r#"{"score": 1, "summary": "s", "missingSkills": []}"#);
        assert!(matches!(result, Err(BackendError::InvalidStructure)));

        let result = decode_analysis(r#"{"score": 1, "summary": "", "missingSkills": [], "suggestions": "x"}"#);
        assert!(matches!(result, Err(BackendError::InvalidStructure)));

        let result = decode_analysis(r#"{"score": 0, "summary": "s", "missingSkills": [], "suggestions": "x"}"#);
        assert_eq!(result.unwrap().score, 0.0);

        let result = decode_analysis("not json");
        assert!(matches!(result, Err(BackendError::ParseError(_))));
    }
}
