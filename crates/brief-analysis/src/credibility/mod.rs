//! Source credibility: per-entry classification and the index summary.

pub mod classifier;
pub mod domains;
pub mod summary;

pub use classifier::{
    classify_evidence_entry, credibility_weight, EvidenceCategory, EvidenceClassifier,
    SourceAssessment,
};
pub use summary::{summarize_source_credibility, CategoryBreakdown, CredibilityVerdict};
