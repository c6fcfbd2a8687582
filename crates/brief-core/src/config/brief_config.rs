//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ClassifierConfig};
use crate::errors::ConfigError;

/// File name of the project config.
pub const PROJECT_CONFIG_FILE: &str = "brief.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`BRIEF_*`)
/// 2. Project config (`brief.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BriefConfig {
    pub analysis: AnalysisConfig,
    pub classifier: ClassifierConfig,
}

impl BriefConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        ::tracing::debug!(path = %project_config_path.display(), "brief config loaded");
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values. Caps of zero would silently
    /// erase whole outputs, so they are rejected.
    pub fn validate(config: &BriefConfig) -> Result<(), ConfigError> {
        let caps = [
            ("analysis.central_node_cap", config.analysis.central_node_cap),
            ("analysis.isolated_node_cap", config.analysis.isolated_node_cap),
            (
                "analysis.single_point_failure_cap",
                config.analysis.single_point_failure_cap,
            ),
            ("analysis.coherence_alert_cap", config.analysis.coherence_alert_cap),
            ("analysis.driver_cap", config.analysis.driver_cap),
        ];
        for (field, value) in caps {
            if value == Some(0) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if config.analysis.min_central_mentions == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.min_central_mentions".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        for suffix in &config.classifier.extra_official_suffixes {
            if !suffix.starts_with('.') {
                return Err(ConfigError::ValidationFailed {
                    field: "classifier.extra_official_suffixes".to_string(),
                    message: format!("suffix '{suffix}' must start with '.'"),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut BriefConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: BriefConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a value.
    fn merge(base: &mut BriefConfig, other: &BriefConfig) {
        let a = &other.analysis;
        if a.central_node_cap.is_some() {
            base.analysis.central_node_cap = a.central_node_cap;
        }
        if a.isolated_node_cap.is_some() {
            base.analysis.isolated_node_cap = a.isolated_node_cap;
        }
        if a.single_point_failure_cap.is_some() {
            base.analysis.single_point_failure_cap = a.single_point_failure_cap;
        }
        if a.coherence_alert_cap.is_some() {
            base.analysis.coherence_alert_cap = a.coherence_alert_cap;
        }
        if a.min_central_mentions.is_some() {
            base.analysis.min_central_mentions = a.min_central_mentions;
        }
        if a.driver_cap.is_some() {
            base.analysis.driver_cap = a.driver_cap;
        }

        let c = &other.classifier;
        if !c.extra_news_domains.is_empty() {
            base.classifier.extra_news_domains = c.extra_news_domains.clone();
        }
        if !c.extra_social_domains.is_empty() {
            base.classifier.extra_social_domains = c.extra_social_domains.clone();
        }
        if !c.extra_official_suffixes.is_empty() {
            base.classifier.extra_official_suffixes = c.extra_official_suffixes.clone();
        }
        if !c.extra_internal_types.is_empty() {
            base.classifier.extra_internal_types = c.extra_internal_types.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `BRIEF_CENTRAL_NODE_CAP`, `BRIEF_COHERENCE_ALERT_CAP`, etc.
    /// Unparseable values are ignored.
    fn apply_env_overrides(config: &mut BriefConfig) {
        let usize_var = |name: &str| std::env::var(name).ok()?.parse::<usize>().ok();

        if let Some(v) = usize_var("BRIEF_CENTRAL_NODE_CAP") {
            config.analysis.central_node_cap = Some(v);
        }
        if let Some(v) = usize_var("BRIEF_ISOLATED_NODE_CAP") {
            config.analysis.isolated_node_cap = Some(v);
        }
        if let Some(v) = usize_var("BRIEF_SINGLE_POINT_FAILURE_CAP") {
            config.analysis.single_point_failure_cap = Some(v);
        }
        if let Some(v) = usize_var("BRIEF_COHERENCE_ALERT_CAP") {
            config.analysis.coherence_alert_cap = Some(v);
        }
        if let Ok(val) = std::env::var("BRIEF_MIN_CENTRAL_MENTIONS") {
            if let Ok(v) = val.parse::<u32>() {
                config.analysis.min_central_mentions = Some(v);
            }
        }
        if let Ok(val) = std::env::var("BRIEF_EXTRA_NEWS_DOMAINS") {
            config.classifier.extra_news_domains = split_list(&val);
        }
        if let Ok(val) = std::env::var("BRIEF_EXTRA_SOCIAL_DOMAINS") {
            config.classifier.extra_social_domains = split_list(&val);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Comma-separated env list, trimmed, empties dropped.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
