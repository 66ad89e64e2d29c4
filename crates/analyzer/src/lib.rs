pub mod analyzer;
pub mod backend;
pub mod config;
pub mod error;
pub mod in_flight;
pub mod prompts;

#[cfg(test)]
mod test_support;

pub use analyzer::{TeamBalanceAnalyzer, decode_analysis};
pub use backend::{
    AnalysisMode, CompletionBackend, CompletionRequest, GeminiClient, HeuristicBackend,
};
pub use config::AnalyzerConfig;
pub use error::{ANALYSIS_FAILED_MESSAGE, AnalysisError, BackendError, Result};
pub use in_flight::{InFlightAnalyses, InFlightGuard};
