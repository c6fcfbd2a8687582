//! Per-pass evidence lookup.
//!
//! Built once from the evidence index and passed by reference to every
//! analyzer, so ref existence, category, and weight are decided in one
//! place. Ids absent from the index are simply not here: every analyzer
//! filters refs through [`EvidenceLookup::valid_refs`] or
//! [`EvidenceLookup::valid_occurrences`].

use brief_core::document::{EvidenceEntry, EvidenceIndex};
use brief_core::types::{FxHashMap, RefList};

use crate::credibility::{EvidenceCategory, EvidenceClassifier, SourceAssessment};

/// One indexed entry with its classification.
#[derive(Debug, Clone, Copy)]
pub struct LookupEntry<'a> {
    pub entry: &'a EvidenceEntry,
    pub assessment: SourceAssessment,
    /// Position in index order.
    pub position: usize,
}

#[derive(Debug)]
pub struct EvidenceLookup<'a> {
    entries: FxHashMap<&'a str, LookupEntry<'a>>,
    /// Ids in index order (the index is a `BTreeMap`, so lexicographic).
    order: Vec<&'a str>,
}

impl<'a> EvidenceLookup<'a> {
    pub fn build(index: &'a EvidenceIndex, classifier: &EvidenceClassifier) -> Self {
        let mut entries = FxHashMap::default();
        entries.reserve(index.len());
        let mut order = Vec::with_capacity(index.len());
        for (position, (id, entry)) in index.iter().enumerate() {
            let id = id.as_str();
            entries.insert(
                id,
                LookupEntry {
                    entry,
                    assessment: classifier.assess(entry),
                    position,
                },
            );
            order.push(id);
        }
        Self { entries, order }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&LookupEntry<'a>> {
        self.entries.get(id)
    }

    pub fn category(&self, id: &str) -> Option<EvidenceCategory> {
        self.entries.get(id).map(|e| e.assessment.category)
    }

    /// Ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.order.iter().copied()
    }

    /// Entries in index order.
    pub fn entries(&self) -> impl Iterator<Item = (&'a str, &LookupEntry<'a>)> + '_ {
        self.order.iter().map(move |id| (*id, &self.entries[id]))
    }

    /// Valid ids among `refs`, first occurrence order, duplicates removed.
    /// Returned ids borrow from the index, not from `refs`.
    pub fn valid_refs<'r, I>(&self, refs: I) -> RefList<'a>
    where
        I: IntoIterator<Item = &'r String>,
    {
        let mut out = RefList::new();
        for r in refs {
            if let Some((id, _)) = self.entries.get_key_value(r.as_str()) {
                if !out.contains(id) {
                    out.push(*id);
                }
            }
        }
        out
    }

    /// Every valid occurrence among `refs`, in order, repeats kept.
    pub fn valid_occurrences<'r, I>(&self, refs: I) -> RefList<'a>
    where
        I: IntoIterator<Item = &'r String>,
    {
        refs.into_iter()
            .filter_map(|r| self.entries.get_key_value(r.as_str()).map(|(id, _)| *id))
            .collect()
    }

    /// Number of refs that point outside the index.
    pub fn dangling_count<'r, I>(&self, refs: I) -> usize
    where
        I: IntoIterator<Item = &'r String>,
    {
        refs.into_iter()
            .filter(|r| !self.entries.contains_key(r.as_str()))
            .count()
    }

    /// Mean credibility weight over every entry; 0.0 for an empty index.
    pub fn mean_weight(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let total: f64 = self.entries().map(|(_, e)| e.assessment.weight).sum();
        total / self.len() as f64
    }
}
