//! One-sentence credibility summary of the evidence index.
//!
//! A lookup from category shares to a fixed sentence, so identical indexes
//! always read the same.

use brief_core::constants::MAJORITY_SHARE;
use brief_core::document::EvidenceIndex;

use super::classifier::{EvidenceCategory, EvidenceClassifier};
use crate::lookup::EvidenceLookup;

/// Entry counts per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryBreakdown {
    counts: [usize; 6],
    total: usize,
}

impl CategoryBreakdown {
    pub fn from_lookup(lookup: &EvidenceLookup<'_>) -> Self {
        let mut breakdown = Self::default();
        for (_, entry) in lookup.entries() {
            breakdown.counts[slot(entry.assessment.category)] += 1;
            breakdown.total += 1;
        }
        breakdown
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, category: EvidenceCategory) -> usize {
        self.counts[slot(category)]
    }

    /// Combined share of `categories`; 0.0 for an empty index.
    pub fn share(&self, categories: &[EvidenceCategory]) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n: usize = categories.iter().map(|c| self.count(*c)).sum();
        n as f64 / self.total as f64
    }

    pub fn verdict(&self) -> CredibilityVerdict {
        use EvidenceCategory::*;

        if self.total == 0 {
            CredibilityVerdict::CannotAssess
        } else if self.share(&[Official, News]) > MAJORITY_SHARE {
            CredibilityVerdict::Strong
        } else if self.share(&[Internal]) > MAJORITY_SHARE {
            CredibilityVerdict::InternalReliance
        } else if self.share(&[Social, Unverified]) > MAJORITY_SHARE {
            CredibilityVerdict::Weak
        } else {
            CredibilityVerdict::Mixed
        }
    }
}

fn slot(category: EvidenceCategory) -> usize {
    match category {
        EvidenceCategory::Official => 0,
        EvidenceCategory::News => 1,
        EvidenceCategory::Social => 2,
        EvidenceCategory::Internal => 3,
        EvidenceCategory::Unverified => 4,
        EvidenceCategory::Other => 5,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CredibilityVerdict {
    CannotAssess,
    Strong,
    InternalReliance,
    Weak,
    Mixed,
}

impl CredibilityVerdict {
    pub fn sentence(self) -> &'static str {
        match self {
            Self::CannotAssess => {
                "Source credibility cannot be assessed because the evidence index is empty."
            }
            Self::Strong => {
                "Source credibility is strong: most evidence comes from official records or established news outlets."
            }
            Self::InternalReliance => {
                "Source credibility relies on internal material: most evidence is notes or confidential items that cannot be checked externally."
            }
            Self::Weak => {
                "Source credibility is weak: most evidence comes from social media or unverified sources."
            }
            Self::Mixed => {
                "Source credibility is mixed: no single kind of source makes up most of the evidence."
            }
        }
    }
}

/// Summary sentence under the built-in classifier.
pub fn summarize_source_credibility(index: &EvidenceIndex) -> String {
    let lookup = EvidenceLookup::build(index, EvidenceClassifier::shared());
    summarize_lookup(&lookup)
}

pub(crate) fn summarize_lookup(lookup: &EvidenceLookup<'_>) -> String {
    let breakdown = CategoryBreakdown::from_lookup(lookup);
    tracing::debug!(
        total = breakdown.total(),
        official = breakdown.count(EvidenceCategory::Official),
        news = breakdown.count(EvidenceCategory::News),
        social = breakdown.count(EvidenceCategory::Social),
        internal = breakdown.count(EvidenceCategory::Internal),
        "credibility breakdown"
    );
    breakdown.verdict().sentence().to_string()
}
