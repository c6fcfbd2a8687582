//! Drivers and weak points.
//!
//! Each dimension is checked in scoring order and may add one fixed
//! sentence to either list. Lists stop growing at the cap.

use brief_core::constants::{
    CONTRADICTION_MAX, DEPTH_MAX, GAP_MAX, HYPOTHESIS_MAX,
};

use super::types::IntegrityBreakdown;

pub const TIMELINE_DRIVER: &str = "Most timeline events are corroborated by two or more sources.";
pub const TIMELINE_WEAK: &str = "Few timeline events are backed by more than one source.";
pub const CONTRADICTION_DRIVER: &str = "No contradictions are recorded against the narrative.";
pub const CONTRADICTION_WEAK: &str = "Several contradictions remain open against the narrative.";
pub const GAP_DRIVER: &str = "No critical evidence gaps are outstanding.";
pub const GAP_WEAK: &str = "Several critical evidence gaps are still open.";
pub const CREDIBILITY_DRIVER: &str = "Evidence is drawn mainly from high-credibility sources.";
pub const CREDIBILITY_WEAK: &str = "Average source credibility is low.";
pub const HYPOTHESIS_DRIVER: &str = "Hypotheses are tested against contrary evidence.";
pub const HYPOTHESIS_WEAK: &str = "Most hypotheses cite no evidence against them.";
pub const DEPTH_DRIVER: &str = "Evidence strength themes cite supporting sources.";
pub const DEPTH_WEAK: &str = "No evidence strength theme cites a supporting source.";
pub const EMPTY_INDEX_WEAK: &str =
    "The evidence index is empty, so no claim can be traced to a source.";

#[derive(Debug, Default)]
pub struct Findings {
    cap: usize,
    pub drivers: Vec<String>,
    pub weak_points: Vec<String>,
}

impl Findings {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            drivers: Vec::new(),
            weak_points: Vec::new(),
        }
    }

    fn driver(&mut self, text: &str) {
        if self.drivers.len() < self.cap {
            self.drivers.push(text.to_string());
        }
    }

    fn weak(&mut self, text: &str) {
        if self.weak_points.len() < self.cap {
            self.weak_points.push(text.to_string());
        }
    }

    /// Findings for a brief with no evidence at all.
    pub fn empty_index(cap: usize) -> Self {
        let mut findings = Self::new(cap);
        findings.weak(EMPTY_INDEX_WEAK);
        findings
    }

    pub fn collect(b: &IntegrityBreakdown, cap: usize) -> Self {
        let mut f = Self::new(cap);

        if b.timeline > 20.0 {
            f.driver(TIMELINE_DRIVER);
        } else if b.timeline < 10.0 && b.event_count > 0 {
            f.weak(TIMELINE_WEAK);
        }

        if b.contradictions >= CONTRADICTION_MAX {
            f.driver(CONTRADICTION_DRIVER);
        } else if b.contradictions <= 10.0 {
            f.weak(CONTRADICTION_WEAK);
        }

        if b.gaps >= GAP_MAX {
            f.driver(GAP_DRIVER);
        } else if b.gaps <= 5.0 {
            f.weak(GAP_WEAK);
        }

        if b.credibility >= 15.0 {
            f.driver(CREDIBILITY_DRIVER);
        } else if b.credibility < 10.0 {
            f.weak(CREDIBILITY_WEAK);
        }

        if b.hypothesis_count > 0 {
            if b.hypotheses >= 15.0 {
                f.driver(HYPOTHESIS_DRIVER);
            } else if b.hypotheses < HYPOTHESIS_MAX / 2.0 {
                f.weak(HYPOTHESIS_WEAK);
            }
        }

        if b.depth >= DEPTH_MAX {
            f.driver(DEPTH_DRIVER);
        } else {
            f.weak(DEPTH_WEAK);
        }

        f
    }
}
