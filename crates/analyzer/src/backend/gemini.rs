use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::{AnalysisMode, CompletionBackend, CompletionRequest};
use crate::config::AnalyzerConfig;
use crate::error::BackendError;

type Result<T> = std::result::Result<T, BackendError>;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
    pub temperature: f32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub usage_metadata: Option<UsageMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: Option<i64>,
    #[serde(default)]
    pub candidates_token_count: Option<i64>,
    #[serde(default)]
    pub total_token_count: Option<i64>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();

        (!text.is_empty()).then_some(text)
    }
}

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    ///
    /// # Arguments
    /// * `base_url` - API root (e.g., "https://generativelanguage.googleapis.com")
    /// * `model` - Model name (e.g., "gemini-2.5-flash")
    /// * `api_key` - Credential sent in the `x-goog-api-key` header
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
        })
    }

    /// Returns `None` when the config carries no API key.
    pub fn from_config(config: &AnalyzerConfig) -> Option<Result<Self>> {
        let api_key = config.api_key.as_ref()?;
        Some(Self::new(
            config.base_url.clone(),
            config.model.clone(),
            api_key.clone(),
            config.timeout,
        ))
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }

    pub fn build_request(prompt: &str, schema: Value, temperature: f32) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: schema,
                temperature,
            },
        }
    }

    /// Generate JSON text constrained by `schema`.
    pub async fn generate_json(
        &self,
        prompt: &str,
        schema: Value,
        temperature: f32,
    ) -> Result<String> {
        let request = Self::build_request(prompt, schema, temperature);

        tracing::info!(
            "Sending request to Gemini (model: {}, prompt length: {} chars)",
            self.model,
            prompt.len()
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        let gemini_response: GenerateContentResponse = response.json().await?;

        if let Some(usage) = &gemini_response.usage_metadata {
            tracing::debug!(
                "Gemini usage: {} prompt tokens, {} output tokens, {} total",
                usage.prompt_token_count.unwrap_or_default(),
                usage.candidates_token_count.unwrap_or_default(),
                usage.total_token_count.unwrap_or_default()
            );
        }

        if let Some(reason) = gemini_response
            .candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
        {
            tracing::debug!("Gemini finish reason: {}", reason);
        }

        gemini_response.text().ok_or(BackendError::EmptyResponse)
    }
}

#[async_trait::async_trait]
impl CompletionBackend for GeminiClient {
    async fn complete(&self, request: &CompletionRequest<'_>) -> Result<String> {
        self.generate_json(&request.prompt, request.schema.clone(), request.temperature)
            .await
    }

    fn name(&self) -> &'static str {
        "gemini"
    }

    fn mode(&self) -> AnalysisMode {
        AnalysisMode::Delegated
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}
