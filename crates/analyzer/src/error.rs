use thiserror::Error;

/// Message shown to users for every delegated-mode failure.
pub const ANALYSIS_FAILED_MESSAGE: &str =
    "Failed to get AI analysis. Please check your API key and the console for details.";

pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Failures inside a completion backend or while decoding its output.
///
/// These never leave the analyzer; they are logged and collapsed into
/// [`AnalysisError::Failed`].
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Completion service error ({status}): {body}")]
    StatusError { status: u16, body: String },

    #[error("Completion service returned no text")]
    EmptyResponse,

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid AI response structure")]
    InvalidStructure,
}

/// Errors surfaced to callers of the analyzer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("{}", ANALYSIS_FAILED_MESSAGE)]
    Failed,

    #[error("An analysis for team {0} is already in progress")]
    Busy(i64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failed_message_is_fixed() {
        assert_eq!(
            AnalysisError::Failed.to_string(),
            "Failed to get AI analysis. Please check your API key and the console for details."
        );
    }

    #[test]
    fn test_invalid_structure_message() {
        assert_eq!(
            BackendError::InvalidStructure.to_string(),
            "Invalid AI response structure"
        );
    }
}
