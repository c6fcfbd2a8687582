//! Integrity score breakdown.

use brief_core::constants::{
    CONTRADICTION_MAX, CREDIBILITY_MAX, DEPTH_MAX, GAP_MAX, HYPOTHESIS_MAX, TIMELINE_MAX,
};

/// Per-dimension sub-scores plus the counts the findings depend on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntegrityBreakdown {
    /// 0-25
    pub timeline: f64,
    /// 0-20
    pub contradictions: f64,
    /// 0-15
    pub gaps: f64,
    /// 0-20
    pub credibility: f64,
    /// 0-20
    pub hypotheses: f64,
    /// 0 or 5
    pub depth: f64,

    pub event_count: usize,
    pub corroborated_events: usize,
    pub contradiction_count: usize,
    pub gap_count: usize,
    pub hypothesis_count: usize,
    pub challenged_hypotheses: usize,
}

impl IntegrityBreakdown {
    /// Raw sum of the sub-scores, before clamping and rounding.
    pub fn total(&self) -> f64 {
        self.timeline + self.contradictions + self.gaps + self.credibility + self.hypotheses
            + self.depth
    }

    /// Every sub-score within its band.
    pub fn is_within_bounds(&self) -> bool {
        let within = |v: f64, max: f64| (0.0..=max).contains(&v);
        within(self.timeline, TIMELINE_MAX)
            && within(self.contradictions, CONTRADICTION_MAX)
            && within(self.gaps, GAP_MAX)
            && within(self.credibility, CREDIBILITY_MAX)
            && within(self.hypotheses, HYPOTHESIS_MAX)
            && within(self.depth, DEPTH_MAX)
    }
}
