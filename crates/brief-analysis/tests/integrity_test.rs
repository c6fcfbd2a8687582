//! Integrity scorer tests.

use brief_analysis::credibility::EvidenceClassifier;
use brief_analysis::integrity::findings::{
    DEPTH_DRIVER, DEPTH_WEAK, EMPTY_INDEX_WEAK, TIMELINE_DRIVER, TIMELINE_WEAK,
};
use brief_analysis::integrity::{compute_integrity_score, grade_for, IntegrityScorer};
use brief_analysis::EvidenceLookup;
use brief_core::config::AnalysisConfig;
use brief_core::document::{BriefDocument, Grade};
use serde_json::{json, Value};

fn doc(value: Value) -> BriefDocument {
    BriefDocument::from_value(value).unwrap()
}

fn base() -> Value {
    json!({
        "evidence_index": {
            "e1": { "url": "https://example.org/a" },
            "e2": { "url": "https://example.org/b" }
        },
        "working_timeline": [
            { "event": "A", "source_ids": ["e1", "e2"] },
            { "event": "B", "source_ids": ["e1"] }
        ],
        "evidence_strength": [
            { "theme": "T", "supporting_refs": [] }
        ]
    })
}

/// A strength theme with one valid supporting ref adds exactly the depth points.
#[test]
fn test_depth_adds_five() {
    let without = doc(base());
    let mut v = base();
    v["evidence_strength"][0]["supporting_refs"] = json!(["e1"]);
    let with = doc(v);

    let a = compute_integrity_score(&without);
    let b = compute_integrity_score(&with);
    assert!(b.score_0_100 > a.score_0_100);
    assert_eq!(b.score_0_100, a.score_0_100 + 5);
    assert!(b.drivers.iter().any(|d| d == DEPTH_DRIVER));
    assert!(a.weak_points.iter().any(|w| w == DEPTH_WEAK));
}

/// A dangling supporting ref does not count as depth.
#[test]
fn test_depth_ignores_dangling_refs() {
    let mut v = base();
    v["evidence_strength"][0]["supporting_refs"] = json!(["ghost"]);
    assert_eq!(
        compute_integrity_score(&doc(v)).score_0_100,
        compute_integrity_score(&doc(base())).score_0_100
    );
}

/// Marking a referenced entry official raises the score.
#[test]
fn test_official_source_raises_score() {
    let plain = doc(base());
    let mut v = base();
    v["evidence_index"]["e1"]["official_source"] = json!(true);
    let official = doc(v);
    assert!(
        compute_integrity_score(&official).score_0_100
            > compute_integrity_score(&plain).score_0_100
    );
}

/// Sub-scores of a hand-checked document.
#[test]
fn test_breakdown_values() {
    let d = doc(json!({
        "evidence_index": {
            "e1": { "official_source": true },
            "e2": { "type": "note" }
        },
        "working_timeline": [
            { "event": "A", "source_ids": ["e1", "e2"] },
            { "event": "B", "source_ids": ["e1", "ghost"] }
        ],
        "contradictions_tensions": [
            { "issue": "x", "details": "", "source_refs": [] },
            { "issue": "y", "details": "", "source_refs": [] },
            { "issue": "z", "details": "", "source_refs": [] }
        ],
        "critical_gaps": [ { "missing_item": "g" } ],
        "hypotheses": [
            { "statement": "h1", "evidence_against": ["e2"] },
            { "statement": "h2", "evidence_against": [] },
            { "statement": "h3", "evidence_against": ["ghost"] },
            { "statement": "h4", "evidence_against": ["e1"] }
        ]
    }));
    let lookup = EvidenceLookup::build(&d.evidence_index, EvidenceClassifier::shared());
    let (score, b) = IntegrityScorer::default().compute(&d, &lookup);

    assert_eq!(b.timeline, 12.5);
    assert_eq!(b.contradictions, 10.0);
    assert_eq!(b.gaps, 10.0);
    assert!((b.credibility - 13.0).abs() < 1e-9);
    assert_eq!(b.hypotheses, 10.0);
    assert_eq!(b.depth, 0.0);
    assert!(b.is_within_bounds());
    // 12.5 + 10 + 10 + 13 + 10 + 0 = 55.5, rounded half away from zero
    assert_eq!(score.score_0_100, 56);
    assert_eq!(score.grade, Grade::F);
}

/// No events and no hypotheses score zero on those dimensions.
#[test]
fn test_no_events_no_hypotheses() {
    let d = doc(json!({ "evidence_index": { "e1": {} } }));
    let lookup = EvidenceLookup::build(&d.evidence_index, EvidenceClassifier::shared());
    let (score, b) = IntegrityScorer::default().compute(&d, &lookup);
    assert_eq!(b.timeline, 0.0);
    assert_eq!(b.hypotheses, 0.0);
    assert_eq!(b.credibility, 0.0);
    // contradictions 20 + gaps 15
    assert_eq!(score.score_0_100, 35);
    assert!(!score.weak_points.iter().any(|w| w == TIMELINE_WEAK));
}

/// Empty index: zero, F, no drivers, one weak point.
#[test]
fn test_empty_index() {
    let d = doc(json!({
        "working_timeline": [ { "event": "A", "source_ids": ["e1"] } ],
        "evidence_strength": [ { "theme": "T", "supporting_refs": ["e1"] } ]
    }));
    let score = compute_integrity_score(&d);
    assert_eq!(score.score_0_100, 0);
    assert_eq!(score.grade, Grade::F);
    assert!(score.drivers.is_empty());
    assert_eq!(score.weak_points, vec![EMPTY_INDEX_WEAK.to_string()]);
}

/// Fully corroborated timeline is a driver; a poorly supported one is a weak point.
#[test]
fn test_timeline_findings() {
    let mut v = base();
    v["working_timeline"] = json!([{ "event": "A", "source_ids": ["e1", "e2"] }]);
    assert!(compute_integrity_score(&doc(v))
        .drivers
        .iter()
        .any(|d| d == TIMELINE_DRIVER));

    let mut v = base();
    v["working_timeline"] = json!([{ "event": "A", "source_ids": ["e1"] }]);
    assert!(compute_integrity_score(&doc(v))
        .weak_points
        .iter()
        .any(|w| w == TIMELINE_WEAK));
}

/// Driver and weak-point lists honour the configured cap.
#[test]
fn test_driver_cap() {
    let d = doc(json!({
        "evidence_index": { "e1": { "official_source": true }, "e2": { "source_tier": "primary" } },
        "working_timeline": [ { "event": "A", "source_ids": ["e1", "e2"] } ],
        "hypotheses": [ { "statement": "h", "evidence_against": ["e1"] } ],
        "evidence_strength": [ { "theme": "T", "supporting_refs": ["e2"] } ]
    }));
    let lookup = EvidenceLookup::build(&d.evidence_index, EvidenceClassifier::shared());

    let default = IntegrityScorer::default().score(&d, &lookup);
    assert_eq!(default.score_0_100, 100);
    assert_eq!(default.grade, Grade::A);
    assert_eq!(default.drivers.len(), 4);

    let capped = IntegrityScorer::new(&AnalysisConfig {
        driver_cap: Some(2),
        ..Default::default()
    })
    .score(&d, &lookup);
    assert_eq!(capped.drivers.len(), 2);
    assert_eq!(capped.drivers[0], TIMELINE_DRIVER);
}

/// Grade bands.
#[test]
fn test_grade_bands() {
    let expected = [
        (95, Grade::A),
        (85, Grade::B),
        (75, Grade::C),
        (65, Grade::D),
        (10, Grade::F),
    ];
    for (score, grade) in expected {
        assert_eq!(grade_for(score), grade);
    }
}
