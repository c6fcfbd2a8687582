//! Hypotheses, critical gaps, evidence strength, and verification tasks.
//! None of these feed the evidence network.

use serde::{Deserialize, Serialize};

use super::lenient;
use super::timeline::Level;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Hypothesis {
    #[serde(default, deserialize_with = "lenient::text")]
    pub statement: String,
    #[serde(default, deserialize_with = "lenient::label")]
    pub likelihood: Level,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub evidence_for: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub evidence_against: Vec<String>,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub falsification_tests: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CriticalGap {
    #[serde(default, deserialize_with = "lenient::text")]
    pub missing_item: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub why_it_matters: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub fastest_way_to_verify: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub suggested_queries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EvidenceStrengthEntry {
    #[serde(default, deserialize_with = "lenient::text")]
    pub theme: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub results_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub saved_links_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub wayback_count: u32,
    #[serde(default, deserialize_with = "lenient::count")]
    pub note_count: u32,
    #[serde(default, deserialize_with = "lenient::text")]
    pub corroboration_estimate: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub strength_rating: String,
    #[serde(default, deserialize_with = "lenient::strings")]
    pub supporting_refs: Vec<String>,
    #[serde(default, deserialize_with = "lenient::opt_count", skip_serializing_if = "Option::is_none")]
    pub primary_sources_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient::opt_count", skip_serializing_if = "Option::is_none")]
    pub secondary_sources_count: Option<u32>,
}

/// A follow-up task. Some generators emit bare strings instead of objects.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "TaskRepr")]
pub struct VerificationTask {
    pub task: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggested_queries: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TaskRepr {
    Text(String),
    Full {
        #[serde(default, deserialize_with = "lenient::text")]
        task: String,
        #[serde(default, deserialize_with = "lenient::opt_text")]
        rationale: Option<String>,
        #[serde(default, deserialize_with = "lenient::opt_text")]
        priority: Option<String>,
        #[serde(default, deserialize_with = "lenient::strings")]
        suggested_queries: Vec<String>,
    },
}

impl From<TaskRepr> for VerificationTask {
    fn from(repr: TaskRepr) -> Self {
        match repr {
            TaskRepr::Text(task) => Self {
                task,
                ..Self::default()
            },
            TaskRepr::Full {
                task,
                rationale,
                priority,
                suggested_queries,
            } => Self {
                task,
                rationale,
                priority,
                suggested_queries,
            },
        }
    }
}
