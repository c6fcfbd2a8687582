//! Central, isolated, and single-point-failure extraction.

use brief_core::config::AnalysisConfig;
use brief_core::constants::{
    DEFAULT_CENTRAL_NODE_CAP, DEFAULT_ISOLATED_NODE_CAP, DEFAULT_MIN_CENTRAL_MENTIONS,
    DEFAULT_SINGLE_POINT_FAILURE_CAP,
};
use brief_core::document::{BriefDocument, EvidenceNetwork, SinglePointFailure};

use super::graph::{CitationGraph, ClaimKind};
use crate::credibility::EvidenceClassifier;
use crate::lookup::EvidenceLookup;

#[derive(Debug, Clone)]
pub struct NetworkAnalyzer {
    central_cap: usize,
    isolated_cap: usize,
    single_point_failure_cap: usize,
    min_central_mentions: u32,
}

impl NetworkAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            central_cap: config.effective_central_node_cap(),
            isolated_cap: config.effective_isolated_node_cap(),
            single_point_failure_cap: config.effective_single_point_failure_cap(),
            min_central_mentions: config.effective_min_central_mentions(),
        }
    }

    pub fn analyze(&self, doc: &BriefDocument, lookup: &EvidenceLookup<'_>) -> EvidenceNetwork {
        if lookup.is_empty() {
            return EvidenceNetwork::default();
        }
        let graph = CitationGraph::build(doc, lookup);
        let network = self.analyze_graph(&graph);
        tracing::debug!(
            evidence_count = graph.evidence_count(),
            claims = graph.claim_count(),
            dangling_refs = graph.dangling_refs(),
            central = network.central_nodes.len(),
            isolated = network.isolated_nodes.len(),
            single_point_failures = network.single_point_failures.len(),
            "evidence network built"
        );
        network
    }

    pub fn analyze_graph(&self, graph: &CitationGraph<'_>) -> EvidenceNetwork {
        let counts = graph.mention_counts();
        let central_nodes = self.central_nodes(&counts);
        let isolated_nodes = self.isolated_nodes(&counts, &central_nodes);
        let single_point_failures = self.single_point_failures(graph);
        EvidenceNetwork {
            central_nodes,
            isolated_nodes,
            single_point_failures,
        }
    }

    /// Highest mention counts first. `counts` is in index order and the
    /// sort is stable, so equal counts keep index order.
    fn central_nodes(&self, counts: &[(&str, u32)]) -> Vec<String> {
        let mut ranked: Vec<(&str, u32)> = counts
            .iter()
            .copied()
            .filter(|(_, n)| *n >= self.min_central_mentions)
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(self.central_cap)
            .map(|(id, _)| id.to_string())
            .collect()
    }

    fn isolated_nodes(&self, counts: &[(&str, u32)], central: &[String]) -> Vec<String> {
        let mut isolated: Vec<&str> = counts
            .iter()
            .filter(|(id, n)| *n == 1 && !central.iter().any(|c| c == id))
            .map(|(id, _)| *id)
            .collect();
        isolated.sort_unstable();
        isolated
            .into_iter()
            .take(self.isolated_cap)
            .map(str::to_string)
            .collect()
    }

    /// Timeline claims first, then contradictions, sharing one cap. Once
    /// the timeline alone fills the cap no contradiction is reported.
    fn single_point_failures(&self, graph: &CitationGraph<'_>) -> Vec<SinglePointFailure> {
        let timeline = graph.claims(ClaimKind::Timeline).filter_map(|(i, node)| {
            graph.sole_support(node).map(|id| SinglePointFailure {
                label: format!("working_timeline_{i}"),
                evidence_id: id.to_string(),
            })
        });
        let contradictions = graph
            .claims(ClaimKind::Contradiction)
            .filter_map(|(i, node)| {
                graph.sole_support(node).map(|id| SinglePointFailure {
                    label: format!("contradiction_{i}"),
                    evidence_id: id.to_string(),
                })
            });
        timeline
            .chain(contradictions)
            .take(self.single_point_failure_cap)
            .collect()
    }
}

impl Default for NetworkAnalyzer {
    fn default() -> Self {
        Self {
            central_cap: DEFAULT_CENTRAL_NODE_CAP,
            isolated_cap: DEFAULT_ISOLATED_NODE_CAP,
            single_point_failure_cap: DEFAULT_SINGLE_POINT_FAILURE_CAP,
            min_central_mentions: DEFAULT_MIN_CENTRAL_MENTIONS,
        }
    }
}

/// Evidence network under default caps.
pub fn compute_evidence_network(doc: &BriefDocument) -> EvidenceNetwork {
    let lookup = EvidenceLookup::build(&doc.evidence_index, EvidenceClassifier::shared());
    NetworkAnalyzer::default().analyze(doc, &lookup)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_ties_keep_index_order() {
        let analyzer = NetworkAnalyzer::default();
        let counts = [("a", 2), ("b", 3), ("c", 2), ("d", 1), ("e", 0)];
        assert_eq!(analyzer.central_nodes(&counts), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn single_mention_ids_rank_as_central_by_default() {
        let analyzer = NetworkAnalyzer::default();
        let counts = [("e1", 1), ("e2", 1), ("e3", 1)];
        let central = analyzer.central_nodes(&counts);
        assert_eq!(central, vec!["e1", "e2", "e3"]);
        assert!(analyzer.isolated_nodes(&counts, &central).is_empty());
    }

    #[test]
    fn uncited_ids_are_neither_central_nor_isolated() {
        let analyzer = NetworkAnalyzer::default();
        let counts = [("a", 0), ("b", 0)];
        let central = analyzer.central_nodes(&counts);
        assert!(central.is_empty());
        assert!(analyzer.isolated_nodes(&counts, &central).is_empty());
    }

    #[test]
    fn raised_threshold_leaves_single_mentions_isolated() {
        let analyzer = NetworkAnalyzer::new(&AnalysisConfig {
            min_central_mentions: Some(2),
            ..Default::default()
        });
        let counts = [("a", 1), ("b", 1)];
        assert!(analyzer.central_nodes(&counts).is_empty());
        assert_eq!(analyzer.isolated_nodes(&counts, &[]), vec!["a", "b"]);
    }

    #[test]
    fn isolated_excludes_central_when_threshold_is_one() {
        let analyzer = NetworkAnalyzer::new(&AnalysisConfig {
            min_central_mentions: Some(1),
            ..Default::default()
        });
        let counts = [("a", 1), ("b", 1)];
        let central = analyzer.central_nodes(&counts);
        assert_eq!(central, vec!["a", "b"]);
        assert!(analyzer.isolated_nodes(&counts, &central).is_empty());
    }
}
