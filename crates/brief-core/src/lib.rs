//! # brief-core
//!
//! Foundation crate for the forensic brief analysis engine.
//! Defines the brief document model, errors, config, tracing setup, and
//! constants. `brief-analysis` depends on everything here.

pub mod config;
pub mod constants;
pub mod document;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::BriefConfig;
pub use document::BriefDocument;
pub use errors::{AnalysisError, ConfigError, DocumentError};
