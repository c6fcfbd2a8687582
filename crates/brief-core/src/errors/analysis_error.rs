//! Top-level error for engine entry points.

use super::error_code::BriefErrorCode;
use super::{ConfigError, DocumentError};

/// Errors surfaced by the analysis engine.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Document error: {0}")]
    Document(#[from] DocumentError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl BriefErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Document(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
