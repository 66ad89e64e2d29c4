use std::time::Duration;
use tracing::warn;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_LOCAL_LATENCY_MS: u64 = 1500;

/// Analyzer settings, read once at startup.
///
/// The presence of an API key is what selects delegated mode; there is no
/// other switch.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeout: Duration,
    pub local_latency: Duration,
}

impl AnalyzerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_key = lookup("API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        if api_key.is_none() {
            warn!("API_KEY is not set. AI analysis will be mocked.");
        }

        let millis = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(default)
        };

        Self {
            api_key,
            model: lookup("GEMINI_MODEL")
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            base_url: lookup("GEMINI_BASE_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .filter(|u| !u.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(millis("ANALYZER_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)),
            local_latency: Duration::from_millis(millis(
                "ANALYZER_LOCAL_LATENCY_MS",
                DEFAULT_LOCAL_LATENCY_MS,
            )),
        }
    }

    pub fn is_delegated(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
