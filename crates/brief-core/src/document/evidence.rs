//! Evidence index entries.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Source tier declared by the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SourceTier {
    Primary,
    Secondary,
    #[default]
    #[serde(other)]
    Unknown,
}

impl SourceTier {
    pub fn is_unknown(&self) -> bool {
        *self == Self::Unknown
    }
}

/// One piece of evidence, keyed by id in the evidence index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvidenceEntry {
    /// Evidence kind as emitted by the generator (`search_result`, `note`, ...).
    #[serde(
        rename = "type",
        default,
        deserialize_with = "lenient::opt_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "lenient::label", skip_serializing_if = "SourceTier::is_unknown")]
    pub source_tier: SourceTier,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub official_source: Option<bool>,
}

impl EvidenceEntry {
    /// Entry with only a URL set.
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Trimmed URL, `None` when absent or blank.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().map(str::trim).filter(|u| !u.is_empty())
    }

    pub fn is_official_source(&self) -> bool {
        self.official_source == Some(true)
    }

    pub fn tier(&self) -> SourceTier {
        self.source_tier
    }
}
