//! # brief-analysis
//!
//! Deterministic post-processing over a generated forensic brief.
//!
//! ## Components
//! 1. **Credibility**: per-entry classification and weight, one-sentence summary
//! 2. **Integrity**: six sub-scores summed into a 0-100 score and letter grade
//! 3. **Network**: citation graph: central, isolated, and single-point-failure ids
//! 4. **Coherence**: consistency checks emitting deduplicated, capped alerts
//! 5. **Diff**: structural comparison of two versions of a brief
//!
//! Every component is a pure function of its input document(s). The
//! [`BriefAnalyzer`] builds one [`EvidenceLookup`] per pass and shares it.

pub mod coherence;
pub mod credibility;
pub mod diff;
pub mod engine;
pub mod integrity;
pub mod lookup;
pub mod network;

pub use coherence::{compute_coherence_alerts, CoherenceEngine};
pub use credibility::{
    classify_evidence_entry, credibility_weight, summarize_source_credibility,
    EvidenceCategory, EvidenceClassifier,
};
pub use diff::{compute_changes_since_last_version, DiffCache};
pub use engine::{BriefAnalyzer, DerivedAnalysis};
pub use integrity::{compute_integrity_score, grade_for, IntegrityScorer};
pub use lookup::EvidenceLookup;
pub use network::{compute_evidence_network, NetworkAnalyzer};
