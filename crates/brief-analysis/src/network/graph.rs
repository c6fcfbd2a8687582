//! Citation graph: claim nodes point at the evidence ids they cite.

use brief_core::document::BriefDocument;
use brief_core::types::{FxHashMap, RefList};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;

use crate::lookup::EvidenceLookup;

/// Kind of citing item. Hypotheses and gaps are not part of the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClaimKind {
    Timeline,
    Entity,
    Contradiction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CitationNode<'a> {
    Evidence(&'a str),
    /// Position of the item within its section.
    Claim { kind: ClaimKind, index: usize },
}

/// Directed graph with one edge per valid ref occurrence, so a claim
/// citing the same id twice has two parallel edges to it.
///
/// The mention count of an id is its in-degree.
pub struct CitationGraph<'a> {
    pub graph: DiGraph<CitationNode<'a>, ()>,
    evidence_nodes: FxHashMap<&'a str, NodeIndex>,
    /// Evidence nodes in index order.
    evidence_order: Vec<NodeIndex>,
    /// Claim nodes in insertion order: timeline, entities, contradictions.
    claims: Vec<NodeIndex>,
    dangling_refs: usize,
}

impl<'a> CitationGraph<'a> {
    pub fn build(doc: &BriefDocument, lookup: &EvidenceLookup<'a>) -> Self {
        let mut g = Self {
            graph: DiGraph::with_capacity(lookup.len(), 0),
            evidence_nodes: FxHashMap::default(),
            evidence_order: Vec::with_capacity(lookup.len()),
            claims: Vec::new(),
            dangling_refs: 0,
        };
        for id in lookup.ids() {
            let idx = g.graph.add_node(CitationNode::Evidence(id));
            g.evidence_nodes.insert(id, idx);
            g.evidence_order.push(idx);
        }

        for (i, item) in doc.working_timeline.iter().enumerate() {
            g.dangling_refs += lookup.dangling_count(item.refs());
            g.add_claim(ClaimKind::Timeline, i, lookup.valid_occurrences(item.refs()));
        }
        for (i, entity) in doc.key_entities.iter().enumerate() {
            g.dangling_refs += lookup.dangling_count(&entity.source_refs);
            g.add_claim(ClaimKind::Entity, i, lookup.valid_occurrences(&entity.source_refs));
        }
        for (i, c) in doc.contradictions_tensions.iter().enumerate() {
            g.dangling_refs += lookup.dangling_count(c.all_refs());
            g.add_claim(ClaimKind::Contradiction, i, lookup.valid_occurrences(c.all_refs()));
        }
        g
    }

    fn add_claim(&mut self, kind: ClaimKind, index: usize, refs: RefList<'a>) {
        let claim = self.graph.add_node(CitationNode::Claim { kind, index });
        self.claims.push(claim);
        for id in refs {
            if let Some(&target) = self.evidence_nodes.get(id) {
                self.graph.add_edge(claim, target, ());
            }
        }
    }

    pub fn evidence_count(&self) -> usize {
        self.evidence_order.len()
    }

    pub fn claim_count(&self) -> usize {
        self.claims.len()
    }

    /// Refs dropped while building because their id is not indexed.
    pub fn dangling_refs(&self) -> usize {
        self.dangling_refs
    }

    pub fn mention_count(&self, id: &str) -> u32 {
        self.evidence_nodes
            .get(id)
            .map(|idx| self.in_degree(*idx))
            .unwrap_or(0)
    }

    /// `(id, mentions)` for every indexed id, in index order.
    pub fn mention_counts(&self) -> Vec<(&'a str, u32)> {
        self.evidence_order
            .iter()
            .filter_map(|idx| match self.graph[*idx] {
                CitationNode::Evidence(id) => Some((id, self.in_degree(*idx))),
                CitationNode::Claim { .. } => None,
            })
            .collect()
    }

    /// Claims of `kind` as `(section index, node)`, in section order.
    pub fn claims(&self, kind: ClaimKind) -> impl Iterator<Item = (usize, NodeIndex)> + '_ {
        self.claims.iter().filter_map(move |idx| match self.graph[*idx] {
            CitationNode::Claim { kind: k, index } if k == kind => Some((index, *idx)),
            _ => None,
        })
    }

    /// The only distinct id a claim cites, if it cites exactly one.
    pub fn sole_support(&self, claim: NodeIndex) -> Option<&'a str> {
        let mut cited = self.graph.neighbors_directed(claim, Direction::Outgoing);
        let first = cited.next()?;
        if cited.any(|other| other != first) {
            return None;
        }
        match self.graph[first] {
            CitationNode::Evidence(id) => Some(id),
            CitationNode::Claim { .. } => None,
        }
    }

    fn in_degree(&self, idx: NodeIndex) -> u32 {
        self.graph
            .neighbors_directed(idx, Direction::Incoming)
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credibility::EvidenceClassifier;
    use brief_core::document::{EvidenceEntry, KeyEntity, TimelineItem};

    fn doc() -> BriefDocument {
        let mut doc = BriefDocument::default();
        for id in ["a", "b"] {
            doc.evidence_index.insert(id.to_string(), EvidenceEntry::default());
        }
        doc.working_timeline.push(TimelineItem {
            source_ids: vec!["a".into(), "a".into(), "ghost".into()],
            ..Default::default()
        });
        doc.key_entities.push(KeyEntity {
            name: "Acme".into(),
            entity_type: "org".into(),
            source_refs: vec!["a".into(), "b".into()],
        });
        doc
    }

    #[test]
    fn every_valid_occurrence_counts() {
        let doc = doc();
        let lookup = EvidenceLookup::build(&doc.evidence_index, EvidenceClassifier::shared());
        let g = CitationGraph::build(&doc, &lookup);
        assert_eq!(g.mention_count("a"), 3);
        assert_eq!(g.mention_count("b"), 1);
        assert_eq!(g.mention_count("ghost"), 0);
        assert_eq!(g.dangling_refs(), 1);
        assert_eq!(g.mention_counts(), vec![("a", 3), ("b", 1)]);
    }

    #[test]
    fn sole_support_requires_exactly_one_id() {
        let doc = doc();
        let lookup = EvidenceLookup::build(&doc.evidence_index, EvidenceClassifier::shared());
        let g = CitationGraph::build(&doc, &lookup);
        let (i, timeline) = g.claims(ClaimKind::Timeline).next().unwrap();
        assert_eq!(i, 0);
        assert_eq!(g.sole_support(timeline), Some("a"));
        let (_, entity) = g.claims(ClaimKind::Entity).next().unwrap();
        assert_eq!(g.sole_support(entity), None);
        assert_eq!(g.claim_count(), 2);
    }
}
