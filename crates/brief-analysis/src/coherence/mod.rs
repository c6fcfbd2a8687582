//! Coherence alerts: consistency checks over one brief.

pub mod checks;
pub mod sink;

use brief_core::config::AnalysisConfig;
use brief_core::constants::DEFAULT_COHERENCE_ALERT_CAP;
use brief_core::document::{BriefDocument, CoherenceAlert};

use crate::credibility::EvidenceClassifier;
use crate::lookup::EvidenceLookup;

pub use sink::AlertSink;

/// Runs the checks in fixed order into one capped, deduplicated list.
#[derive(Debug, Clone)]
pub struct CoherenceEngine {
    cap: usize,
}

impl CoherenceEngine {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            cap: config.effective_coherence_alert_cap(),
        }
    }

    pub fn check(&self, doc: &BriefDocument, lookup: &EvidenceLookup<'_>) -> Vec<CoherenceAlert> {
        let mut sink = AlertSink::new(self.cap);
        checks::verified_with_thin_support(doc, lookup, &mut sink);
        checks::high_confidence_on_weak_sources(doc, lookup, &mut sink);
        checks::unresolved_contradictions(doc, lookup, &mut sink);
        tracing::debug!(
            alert_count = sink.len(),
            duplicates = sink.duplicates(),
            "coherence checks done"
        );
        sink.into_alerts()
    }
}

impl Default for CoherenceEngine {
    fn default() -> Self {
        Self {
            cap: DEFAULT_COHERENCE_ALERT_CAP,
        }
    }
}

/// Coherence alerts under the built-in classifier and default cap.
pub fn compute_coherence_alerts(doc: &BriefDocument) -> Vec<CoherenceAlert> {
    let lookup = EvidenceLookup::build(&doc.evidence_index, EvidenceClassifier::shared());
    CoherenceEngine::default().check(doc, &lookup)
}
