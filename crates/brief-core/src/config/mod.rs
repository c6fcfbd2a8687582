//! Configuration system for the brief engine.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod analysis_config;
pub mod brief_config;
pub mod classifier_config;

pub use analysis_config::AnalysisConfig;
pub use brief_config::BriefConfig;
pub use classifier_config::ClassifierConfig;
