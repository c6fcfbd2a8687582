//! The forensic brief document.
//!
//! A brief is produced once by the generator, checked by an external
//! validator, analyzed here, and stored. Every section reads leniently (see
//! `lenient`): a missing or malformed section is empty, never an error.

pub mod contradiction;
pub mod derived;
pub mod edits;
pub mod entity;
pub mod evidence;
pub mod fingerprint;
pub mod hypothesis;
mod lenient;
pub mod timeline;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DocumentError;
use crate::types::collections::BTreeMap;

pub use contradiction::{Contradiction, LegacyContradiction, StructuredContradiction};
pub use derived::{
    AlertSeverity, ChangeKind, CoherenceAlert, DiffSection, EvidenceNetwork, Grade,
    IntegrityScore, SinglePointFailure, VersionChange,
};
pub use edits::{with_timeline_verified, with_user_note};
pub use entity::KeyEntity;
pub use evidence::{EvidenceEntry, SourceTier};
pub use fingerprint::document_fingerprint;
pub use hypothesis::{CriticalGap, EvidenceStrengthEntry, Hypothesis, VerificationTask};
pub use timeline::{EvidenceBasis, Level, TimelineItem};

/// Evidence id → entry. Ordered so every traversal is deterministic.
pub type EvidenceIndex = BTreeMap<String, EvidenceEntry>;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BriefDocument {
    #[serde(default, deserialize_with = "lenient::text")]
    pub executive_overview: String,
    #[serde(default, deserialize_with = "lenient::map")]
    pub evidence_index: EvidenceIndex,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub working_timeline: Vec<TimelineItem>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub key_entities: Vec<KeyEntity>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub contradictions_tensions: Vec<Contradiction>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub hypotheses: Vec<Hypothesis>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub critical_gaps: Vec<CriticalGap>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub evidence_strength: Vec<EvidenceStrengthEntry>,
    #[serde(default, deserialize_with = "lenient::seq")]
    pub verification_tasks: Vec<VerificationTask>,

    /// Free-text note edited by the user after generation.
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub user_note: Option<String>,

    // ---- Derived ----
    #[serde(default, deserialize_with = "lenient::opt", skip_serializing_if = "Option::is_none")]
    pub source_credibility_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt", skip_serializing_if = "Option::is_none")]
    pub integrity_score: Option<IntegrityScore>,
    #[serde(default, deserialize_with = "lenient::opt", skip_serializing_if = "Option::is_none")]
    pub evidence_network: Option<EvidenceNetwork>,
    #[serde(default, deserialize_with = "lenient::opt", skip_serializing_if = "Option::is_none")]
    pub coherence_alerts: Option<Vec<CoherenceAlert>>,
    #[serde(default, deserialize_with = "lenient::opt", skip_serializing_if = "Option::is_none")]
    pub changes_since_last_version: Option<Vec<VersionChange>>,

    /// Fields this engine does not interpret (case metadata, query terms, ...),
    /// kept so a merged document round-trips.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl BriefDocument {
    /// Parse a brief from JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(json).map_err(DocumentError::Parse)?;
        Self::from_value(value)
    }

    /// Read a brief from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        if !value.is_object() {
            return Err(DocumentError::NotAnObject {
                found: lenient::json_kind(&value),
            });
        }
        serde_json::from_value(value).map_err(DocumentError::Parse)
    }

    pub fn to_value(&self) -> Result<Value, DocumentError> {
        serde_json::to_value(self).map_err(DocumentError::Serialize)
    }

    pub fn to_json_pretty(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self).map_err(DocumentError::Serialize)
    }

    pub fn has_evidence(&self, id: &str) -> bool {
        self.evidence_index.contains_key(id)
    }

    /// Copy of this document with every derived field cleared.
    pub fn without_derived(&self) -> Self {
        Self {
            source_credibility_summary: None,
            integrity_score: None,
            evidence_network: None,
            coherence_alerts: None,
            changes_since_last_version: None,
            ..self.clone()
        }
    }
}
