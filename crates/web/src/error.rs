use analyzer::AnalysisError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Analysis(AnalysisError),
    BadRequest(String),
    NotFound(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Analysis(e) => write!(f, "Analysis error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotSignedIn) => StatusCode::UNAUTHORIZED,
            Self::Storage(StorageError::TeamNotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::EmptyTeamName) => StatusCode::BAD_REQUEST,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Analysis(AnalysisError::Failed) => StatusCode::BAD_GATEWAY,
            Self::Analysis(AnalysisError::Busy(_)) => StatusCode::CONFLICT,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = match &self {
            Self::Storage(e @ (StorageError::NotSignedIn
            | StorageError::TeamNotFound
            | StorageError::EmptyTeamName)) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Analysis(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::BadRequest(msg) | Self::NotFound(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<AnalysisError> for WebError {
    fn from(error: AnalysisError) -> Self {
        Self::Analysis(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;
