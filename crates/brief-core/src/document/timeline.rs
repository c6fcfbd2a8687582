//! Working timeline items.

use serde::{Deserialize, Serialize};

use super::lenient;

/// High/medium/low rating used for timeline confidence and hypothesis likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    High,
    Medium,
    Low,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Where a timeline claim comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceBasis {
    Public,
    Note,
    Confidential,
    Unverified,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TimelineItem {
    #[serde(default, deserialize_with = "lenient::text")]
    pub time_window: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub event: String,
    #[serde(default, deserialize_with = "lenient::label")]
    pub confidence: Level,
    #[serde(default, deserialize_with = "lenient::label")]
    pub basis: EvidenceBasis,
    #[serde(default, deserialize_with = "lenient::strings", skip_serializing_if = "Vec::is_empty")]
    pub source_ids: Vec<String>,
    /// Older briefs carry refs here instead of `source_ids`.
    #[serde(default, deserialize_with = "lenient::strings", skip_serializing_if = "Vec::is_empty")]
    pub source_refs: Vec<String>,
    #[serde(default, deserialize_with = "lenient::flag", skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl TimelineItem {
    /// Effective ref list: `source_ids` when present, otherwise the legacy field.
    pub fn refs(&self) -> &[String] {
        if self.source_ids.is_empty() {
            &self.source_refs
        } else {
            &self.source_ids
        }
    }

    pub fn is_verified(&self) -> bool {
        self.verified == Some(true)
    }
}
