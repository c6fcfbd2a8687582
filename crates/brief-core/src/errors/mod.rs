//! Error handling for the brief engine.
//! One error enum per concern, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod document_error;
pub mod error_code;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use document_error::DocumentError;
pub use error_code::BriefErrorCode;
