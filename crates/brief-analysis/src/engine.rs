//! Analysis engine: one lookup per pass, every analyzer over it, and an
//! atomic merge of the results back into the document.

use std::sync::Arc;
use std::time::Instant;

use brief_core::config::BriefConfig;
use brief_core::document::{
    BriefDocument, CoherenceAlert, EvidenceNetwork, IntegrityScore, VersionChange,
};
use brief_core::errors::AnalysisError;
use brief_core::tracing::metrics;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::field::Empty;

use crate::coherence::CoherenceEngine;
use crate::credibility::summary::summarize_lookup;
use crate::credibility::EvidenceClassifier;
use crate::diff::{compute_changes_since_last_version, DiffCache};
use crate::integrity::IntegrityScorer;
use crate::lookup::EvidenceLookup;
use crate::network::NetworkAnalyzer;

/// Everything derived from a single document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DerivedAnalysis {
    pub source_credibility_summary: String,
    pub integrity_score: IntegrityScore,
    pub evidence_network: EvidenceNetwork,
    pub coherence_alerts: Vec<CoherenceAlert>,
}

impl DerivedAnalysis {
    /// New document with all derived fields replaced together. The input
    /// is untouched, so a reader never sees a partial merge.
    pub fn apply_to(&self, doc: &BriefDocument) -> BriefDocument {
        self.clone().into_document(doc.clone())
    }

    pub fn into_document(self, mut doc: BriefDocument) -> BriefDocument {
        doc.source_credibility_summary = Some(self.source_credibility_summary);
        doc.integrity_score = Some(self.integrity_score);
        doc.evidence_network = Some(self.evidence_network);
        doc.coherence_alerts = Some(self.coherence_alerts);
        doc
    }
}

pub struct BriefAnalyzer {
    classifier: EvidenceClassifier,
    integrity: IntegrityScorer,
    network: NetworkAnalyzer,
    coherence: CoherenceEngine,
    diff_cache: DiffCache,
}

impl BriefAnalyzer {
    pub fn new(config: &BriefConfig) -> Self {
        Self {
            classifier: EvidenceClassifier::new(&config.classifier),
            integrity: IntegrityScorer::new(&config.analysis),
            network: NetworkAnalyzer::new(&config.analysis),
            coherence: CoherenceEngine::new(&config.analysis),
            diff_cache: DiffCache::default(),
        }
    }

    pub fn classifier(&self) -> &EvidenceClassifier {
        &self.classifier
    }

    pub fn analyze(&self, doc: &BriefDocument) -> DerivedAnalysis {
        let start = Instant::now();
        let span = tracing::info_span!(
            "analyze_brief",
            evidence_count = doc.evidence_index.len(),
            integrity_score = Empty,
            alert_count = Empty,
            single_point_failures = Empty,
            analysis_time_us = Empty,
        );
        let _guard = span.enter();

        let lookup = EvidenceLookup::build(&doc.evidence_index, &self.classifier);
        let source_credibility_summary = summarize_lookup(&lookup);
        let integrity_score = self.integrity.score(doc, &lookup);
        let evidence_network = self.network.analyze(doc, &lookup);
        let coherence_alerts = self.coherence.check(doc, &lookup);

        let elapsed_us = start.elapsed().as_micros() as u64;
        span.record(metrics::INTEGRITY_SCORE, integrity_score.score_0_100);
        span.record(metrics::ALERT_COUNT, coherence_alerts.len());
        span.record(
            metrics::SINGLE_POINT_FAILURES,
            evidence_network.single_point_failures.len(),
        );
        span.record(metrics::ANALYSIS_TIME_US, elapsed_us);
        tracing::info!(grade = %integrity_score.grade, "brief analyzed");

        DerivedAnalysis {
            source_credibility_summary,
            integrity_score,
            evidence_network,
            coherence_alerts,
        }
    }

    /// Parse and analyze a JSON document.
    pub fn analyze_json(&self, json: &str) -> Result<DerivedAnalysis, AnalysisError> {
        let doc = BriefDocument::from_json(json)?;
        Ok(self.analyze(&doc))
    }

    /// Analyze and return the document with derived fields merged in.
    pub fn analyze_and_apply(&self, doc: &BriefDocument) -> BriefDocument {
        self.analyze(doc).apply_to(doc)
    }

    /// Analyze independent documents in parallel. Output order matches input.
    pub fn analyze_batch(&self, docs: &[BriefDocument]) -> Vec<DerivedAnalysis> {
        docs.par_iter().map(|doc| self.analyze(doc)).collect()
    }

    pub fn diff(&self, prev: &BriefDocument, next: &BriefDocument) -> Vec<VersionChange> {
        compute_changes_since_last_version(prev, next)
    }

    /// Diff served from the fingerprint-keyed cache.
    pub fn diff_cached(
        &self,
        prev: &BriefDocument,
        next: &BriefDocument,
    ) -> Result<Arc<Vec<VersionChange>>, AnalysisError> {
        Ok(self.diff_cache.changes(prev, next)?)
    }

    /// `next` carrying its changes relative to `prev`.
    pub fn with_changes(
        &self,
        prev: &BriefDocument,
        next: &BriefDocument,
    ) -> Result<BriefDocument, AnalysisError> {
        let changes = self.diff_cached(prev, next)?;
        let mut doc = next.clone();
        doc.changes_since_last_version = Some(changes.as_ref().clone());
        Ok(doc)
    }
}

impl Default for BriefAnalyzer {
    fn default() -> Self {
        Self::new(&BriefConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brief_core::document::EvidenceEntry;

    #[test]
    fn apply_to_sets_every_derived_field() {
        let mut doc = BriefDocument::default();
        doc.evidence_index
            .insert("e1".into(), EvidenceEntry::with_url("https://www.sec.gov/x"));
        let analyzer = BriefAnalyzer::default();
        let merged = analyzer.analyze_and_apply(&doc);
        assert!(merged.source_credibility_summary.is_some());
        assert!(merged.integrity_score.is_some());
        assert!(merged.evidence_network.is_some());
        assert!(merged.coherence_alerts.is_some());
        assert!(doc.integrity_score.is_none());
        assert_eq!(merged.without_derived(), doc.without_derived());
    }

    #[test]
    fn analyzer_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<BriefAnalyzer>();
        assert_send_sync::<DerivedAnalysis>();
    }
}
