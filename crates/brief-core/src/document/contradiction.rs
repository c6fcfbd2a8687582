//! Contradictions and tensions, in legacy and structured form.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;
use crate::types::collections::BTreeMap;

/// A contradiction recorded in the brief.
///
/// Older briefs store a free-text `details` with one ref list; newer ones
/// spell out both statements with separate refs. An object carrying any
/// field of [`STRUCTURED_KEYS`] is structured, anything else is legacy.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Contradiction {
    Structured(StructuredContradiction),
    Legacy(LegacyContradiction),
}

/// Fields that only the structured form has.
pub const STRUCTURED_KEYS: &[&str] = &[
    "statement_a",
    "statement_a_refs",
    "statement_b",
    "statement_b_refs",
    "issue_type",
    "why_it_matters",
    "resolution_tasks",
];

impl<'de> Deserialize<'de> for Contradiction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let structured = value
            .as_object()
            .is_some_and(|fields| STRUCTURED_KEYS.iter().any(|k| fields.contains_key(*k)));
        if structured {
            serde_json::from_value(value)
                .map(Self::Structured)
                .map_err(D::Error::custom)
        } else {
            serde_json::from_value(value)
                .map(Self::Legacy)
                .map_err(D::Error::custom)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LegacyContradiction {
    #[serde(default, deserialize_with = "lenient::text")]
    pub issue: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub details: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub source_refs: Vec<String>,
    /// Fields the analyzers do not model, kept so edits to them still diff.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructuredContradiction {
    #[serde(default, deserialize_with = "lenient::text")]
    pub issue: String,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub statement_a: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub statement_a_refs: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub statement_b: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub statement_b_refs: Vec<String>,
    /// Carried over when a legacy record was upgraded in place.
    #[serde(default, deserialize_with = "lenient::strings", skip_serializing_if = "Vec::is_empty")]
    pub source_refs: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_text", skip_serializing_if = "Option::is_none")]
    pub why_it_matters: Option<String>,
    /// Free-form tasks; only emptiness matters to the analyzers.
    #[serde(default, deserialize_with = "lenient::seq")]
    pub resolution_tasks: Vec<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

const NO_REFS: &[String] = &[];

impl Contradiction {
    pub fn issue(&self) -> &str {
        match self {
            Self::Structured(c) => &c.issue,
            Self::Legacy(c) => &c.issue,
        }
    }

    /// Resolution tasks; legacy contradictions never have any.
    pub fn resolution_tasks(&self) -> &[Value] {
        match self {
            Self::Structured(c) => &c.resolution_tasks,
            Self::Legacy(_) => &[],
        }
    }

    /// The three ref fields in fixed order: statement A, statement B, legacy.
    pub fn ref_fields(&self) -> [&[String]; 3] {
        match self {
            Self::Structured(c) => [&c.statement_a_refs, &c.statement_b_refs, &c.source_refs],
            Self::Legacy(c) => [NO_REFS, NO_REFS, &c.source_refs],
        }
    }

    /// All refs across the three fields, in field order, duplicates kept.
    pub fn all_refs(&self) -> impl Iterator<Item = &String> {
        self.ref_fields().into_iter().flatten()
    }

    pub fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }
}
