//! Derived outputs attached to a brief after analysis.
//!
//! These are produced by `brief-analysis` but live here because the
//! document carries them and renderers read them back.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Letter grade on the rounded integrity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegrityScore {
    pub score_0_100: u32,
    pub grade: Grade,
    pub drivers: Vec<String>,
    pub weak_points: Vec<String>,
}

/// A claim whose whole support is a single evidence id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglePointFailure {
    /// `working_timeline_<i>` or `contradiction_<i>`.
    pub label: String,
    pub evidence_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvidenceNetwork {
    pub central_nodes: Vec<String>,
    pub isolated_nodes: Vec<String>,
    pub single_point_failures: Vec<SinglePointFailure>,
}

impl EvidenceNetwork {
    pub fn is_empty(&self) -> bool {
        self.central_nodes.is_empty()
            && self.isolated_nodes.is_empty()
            && self.single_point_failures.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoherenceAlert {
    pub severity: AlertSeverity,
    pub alert: String,
    pub why_it_matters: String,
    pub affected_sections: Vec<String>,
    pub related_evidence_ids: Vec<String>,
}

/// Document sections compared between versions. Order here is output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffSection {
    ExecutiveOverview,
    WorkingTimeline,
    KeyEntities,
    ContradictionsTensions,
    VerificationTasks,
}

impl DiffSection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ExecutiveOverview => "executive_overview",
            Self::WorkingTimeline => "working_timeline",
            Self::KeyEntities => "key_entities",
            Self::ContradictionsTensions => "contradictions_tensions",
            Self::VerificationTasks => "verification_tasks",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionChange {
    pub section: DiffSection,
    pub kind: ChangeKind,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}
