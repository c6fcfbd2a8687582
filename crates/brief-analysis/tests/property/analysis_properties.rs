use brief_analysis::{compute_changes_since_last_version, grade_for, BriefAnalyzer};
use brief_core::document::BriefDocument;
use proptest::prelude::*;
use serde_json::{json, Value};

const URLS: &[&str] = &[
    "https://www.sec.gov/filing",
    "https://www.reuters.com/story",
    "https://twitter.com/someone/status/1",
    "https://example.org/page",
    "",
];

fn evidence_entry() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(URLS),
        prop::option::of(prop::sample::select(vec!["note", "confidential", "web"])),
        prop::option::of(prop::sample::select(vec!["primary", "secondary"])),
        any::<bool>(),
    )
        .prop_map(|(url, kind, tier, official)| {
            let mut entry = json!({ "url": url, "official_source": official });
            if let Some(kind) = kind {
                entry["type"] = json!(kind);
            }
            if let Some(tier) = tier {
                entry["source_tier"] = json!(tier);
            }
            entry
        })
}

/// Refs drawn from a pool larger than the index so some dangle.
fn refs() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0u8..16).prop_map(|i| format!("e{i}")), 0..5)
}

fn timeline_item() -> impl Strategy<Value = Value> {
    (
        "[a-z ]{0,12}",
        prop::sample::select(vec!["high", "medium", "low"]),
        refs(),
        refs(),
        any::<bool>(),
    )
        .prop_map(|(event, confidence, ids, source_refs, verified)| {
            json!({
                "event": event,
                "confidence": confidence,
                "source_ids": ids,
                "source_refs": source_refs,
                "verified": verified
            })
        })
}

fn contradiction() -> impl Strategy<Value = Value> {
    ("[a-z ]{0,12}", refs(), refs(), any::<bool>(), any::<bool>()).prop_map(
        |(issue, a, b, structured, has_task)| {
            if structured {
                let tasks = if has_task { vec![json!("check")] } else { vec![] };
                json!({
                    "issue": issue,
                    "statement_a": "a",
                    "statement_a_refs": a,
                    "statement_b": "b",
                    "statement_b_refs": b,
                    "resolution_tasks": tasks
                })
            } else {
                json!({ "issue": issue, "details": "", "source_refs": a })
            }
        },
    )
}

fn brief() -> impl Strategy<Value = BriefDocument> {
    (
        prop::collection::btree_map((0u8..12).prop_map(|i| format!("e{i}")), evidence_entry(), 0..12),
        prop::collection::vec(timeline_item(), 0..14),
        prop::collection::vec(contradiction(), 0..6),
        prop::collection::vec(refs(), 0..4),
        prop::collection::vec("[a-z]{1,8}", 0..4),
    )
        .prop_map(|(index, timeline, contradictions, against, tasks)| {
            let hypotheses: Vec<Value> = against
                .into_iter()
                .map(|refs| json!({ "statement": "h", "evidence_against": refs }))
                .collect();
            let value = json!({
                "executive_overview": "overview",
                "evidence_index": index,
                "working_timeline": timeline,
                "contradictions_tensions": contradictions,
                "hypotheses": hypotheses,
                "verification_tasks": tasks
            });
            BriefDocument::from_value(value).unwrap()
        })
}

proptest! {
    #[test]
    fn score_is_bounded_and_graded(doc in brief()) {
        let analysis = BriefAnalyzer::default().analyze(&doc);
        let score = &analysis.integrity_score;
        prop_assert!(score.score_0_100 <= 100);
        prop_assert_eq!(score.grade, grade_for(score.score_0_100));
        prop_assert!(score.drivers.len() <= 4);
        prop_assert!(score.weak_points.len() <= 4);
    }

    #[test]
    fn outputs_respect_caps(doc in brief()) {
        let analysis = BriefAnalyzer::default().analyze(&doc);
        let network = &analysis.evidence_network;
        prop_assert!(network.central_nodes.len() <= 5);
        prop_assert!(network.isolated_nodes.len() <= 10);
        prop_assert!(network.single_point_failures.len() <= 10);
        prop_assert!(analysis.coherence_alerts.len() <= 10);
    }

    #[test]
    fn network_only_names_indexed_evidence(doc in brief()) {
        let network = BriefAnalyzer::default().analyze(&doc).evidence_network;
        for id in network.central_nodes.iter().chain(&network.isolated_nodes) {
            prop_assert!(doc.has_evidence(id));
        }
        for spf in &network.single_point_failures {
            prop_assert!(doc.has_evidence(&spf.evidence_id));
            prop_assert!(
                spf.label.starts_with("working_timeline_")
                    || spf.label.starts_with("contradiction_")
            );
        }
        for id in &network.isolated_nodes {
            prop_assert!(!network.central_nodes.contains(id));
        }
    }

    #[test]
    fn analysis_is_deterministic(doc in brief()) {
        let analyzer = BriefAnalyzer::default();
        prop_assert_eq!(analyzer.analyze(&doc), analyzer.analyze(&doc.clone()));
    }

    #[test]
    fn diff_against_self_is_empty(doc in brief()) {
        prop_assert!(compute_changes_since_last_version(&doc, &doc).is_empty());
    }

    #[test]
    fn merged_document_analyzes_the_same(doc in brief()) {
        let analyzer = BriefAnalyzer::default();
        let merged = analyzer.analyze_and_apply(&doc);
        prop_assert_eq!(analyzer.analyze(&merged), analyzer.analyze(&doc));
        prop_assert!(compute_changes_since_last_version(&doc, &merged).is_empty());
    }
}
