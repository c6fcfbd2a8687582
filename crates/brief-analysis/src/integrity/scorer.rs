//! Six-dimension integrity scorer.
//!
//! score = timeline (25) + contradictions (20) + gaps (15)
//!       + credibility (20) + hypotheses (20) + depth (5)
//!
//! Clamped to [0, 100] and rounded half away from zero before grading.

use brief_core::config::AnalysisConfig;
use brief_core::constants::{
    CONTRADICTION_MAX, CORROBORATION_MIN_REFS, CREDIBILITY_MAX, DEFAULT_DRIVER_CAP, DEPTH_MAX,
    GAP_MAX, GRADE_A_MIN, GRADE_B_MIN, GRADE_C_MIN, GRADE_D_MIN, HYPOTHESIS_MAX, TIMELINE_MAX,
};
use brief_core::document::{BriefDocument, Grade, IntegrityScore};

use super::findings::Findings;
use super::types::IntegrityBreakdown;
use crate::credibility::EvidenceClassifier;
use crate::lookup::EvidenceLookup;

/// Computes the integrity score of one brief.
#[derive(Debug, Clone)]
pub struct IntegrityScorer {
    driver_cap: usize,
}

impl IntegrityScorer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            driver_cap: config.effective_driver_cap(),
        }
    }

    pub fn compute(
        &self,
        doc: &BriefDocument,
        lookup: &EvidenceLookup<'_>,
    ) -> (IntegrityScore, IntegrityBreakdown) {
        if lookup.is_empty() {
            // Zero regardless of the banded dimensions.
            let findings = Findings::empty_index(self.driver_cap);
            let score = IntegrityScore {
                score_0_100: 0,
                grade: Grade::F,
                drivers: findings.drivers,
                weak_points: findings.weak_points,
            };
            return (score, IntegrityBreakdown::default());
        }

        let mut b = IntegrityBreakdown::default();
        self.score_timeline(doc, lookup, &mut b);
        b.contradiction_count = doc.contradictions_tensions.len();
        b.contradictions = contradiction_band(b.contradiction_count);
        b.gap_count = doc.critical_gaps.len();
        b.gaps = gap_band(b.gap_count);
        b.credibility = lookup.mean_weight() * CREDIBILITY_MAX;
        self.score_hypotheses(doc, lookup, &mut b);
        b.depth = self.score_depth(doc, lookup);

        let rounded = b.total().clamp(0.0, 100.0).round() as u32;
        let findings = Findings::collect(&b, self.driver_cap);

        tracing::debug!(
            integrity_score = rounded,
            timeline = b.timeline,
            contradictions = b.contradictions,
            gaps = b.gaps,
            credibility = b.credibility,
            hypotheses = b.hypotheses,
            depth = b.depth,
            "integrity scored"
        );

        let score = IntegrityScore {
            score_0_100: rounded,
            grade: grade_for(rounded),
            drivers: findings.drivers,
            weak_points: findings.weak_points,
        };
        (score, b)
    }

    pub fn score(&self, doc: &BriefDocument, lookup: &EvidenceLookup<'_>) -> IntegrityScore {
        self.compute(doc, lookup).0
    }

    fn score_timeline(
        &self,
        doc: &BriefDocument,
        lookup: &EvidenceLookup<'_>,
        b: &mut IntegrityBreakdown,
    ) {
        b.event_count = doc.working_timeline.len();
        if b.event_count == 0 {
            return;
        }
        b.corroborated_events = doc
            .working_timeline
            .iter()
            .filter(|item| lookup.valid_refs(item.refs()).len() >= CORROBORATION_MIN_REFS)
            .count();
        b.timeline = b.corroborated_events as f64 / b.event_count as f64 * TIMELINE_MAX;
    }

    fn score_hypotheses(
        &self,
        doc: &BriefDocument,
        lookup: &EvidenceLookup<'_>,
        b: &mut IntegrityBreakdown,
    ) {
        b.hypothesis_count = doc.hypotheses.len();
        if b.hypothesis_count == 0 {
            return;
        }
        b.challenged_hypotheses = doc
            .hypotheses
            .iter()
            .filter(|h| !lookup.valid_refs(&h.evidence_against).is_empty())
            .count();
        b.hypotheses = b.challenged_hypotheses as f64 / b.hypothesis_count as f64 * HYPOTHESIS_MAX;
    }

    fn score_depth(&self, doc: &BriefDocument, lookup: &EvidenceLookup<'_>) -> f64 {
        let deep = doc
            .evidence_strength
            .iter()
            .any(|theme| theme.supporting_refs.iter().any(|r| lookup.contains(r)));
        if deep {
            DEPTH_MAX
        } else {
            0.0
        }
    }
}

impl Default for IntegrityScorer {
    fn default() -> Self {
        Self {
            driver_cap: DEFAULT_DRIVER_CAP,
        }
    }
}

fn contradiction_band(count: usize) -> f64 {
    match count {
        0 => CONTRADICTION_MAX,
        1..=2 => 15.0,
        3..=4 => 10.0,
        _ => 0.0,
    }
}

fn gap_band(count: usize) -> f64 {
    match count {
        0 => GAP_MAX,
        1..=2 => 10.0,
        3..=4 => 5.0,
        _ => 0.0,
    }
}

/// Letter grade for a rounded score.
pub fn grade_for(score: u32) -> Grade {
    match score {
        s if s >= GRADE_A_MIN => Grade::A,
        s if s >= GRADE_B_MIN => Grade::B,
        s if s >= GRADE_C_MIN => Grade::C,
        s if s >= GRADE_D_MIN => Grade::D,
        _ => Grade::F,
    }
}

/// Integrity score under the built-in classifier and default caps.
pub fn compute_integrity_score(doc: &BriefDocument) -> IntegrityScore {
    let lookup = EvidenceLookup::build(&doc.evidence_index, EvidenceClassifier::shared());
    IntegrityScorer::default().score(doc, &lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands() {
        assert_eq!(contradiction_band(0), 20.0);
        assert_eq!(contradiction_band(2), 15.0);
        assert_eq!(contradiction_band(3), 10.0);
        assert_eq!(contradiction_band(5), 0.0);
        assert_eq!(gap_band(0), 15.0);
        assert_eq!(gap_band(1), 10.0);
        assert_eq!(gap_band(4), 5.0);
        assert_eq!(gap_band(9), 0.0);
    }

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(grade_for(100), Grade::A);
        assert_eq!(grade_for(90), Grade::A);
        assert_eq!(grade_for(89), Grade::B);
        assert_eq!(grade_for(80), Grade::B);
        assert_eq!(grade_for(70), Grade::C);
        assert_eq!(grade_for(60), Grade::D);
        assert_eq!(grade_for(59), Grade::F);
        assert_eq!(grade_for(0), Grade::F);
    }

    #[test]
    fn half_rounds_away_from_zero() {
        assert_eq!(62.5_f64.round() as u32, 63);
    }

    #[test]
    fn empty_index_scores_zero() {
        let doc = BriefDocument::default();
        let score = compute_integrity_score(&doc);
        assert_eq!(score.score_0_100, 0);
        assert_eq!(score.grade, Grade::F);
        assert!(score.drivers.is_empty());
        assert_eq!(score.weak_points.len(), 1);
    }
}
