//! Version diff engine and diff cache tests.

use std::sync::Arc;

use brief_analysis::diff::{compute_changes_since_last_version, DiffCache};
use brief_core::document::{
    with_timeline_verified, with_user_note, BriefDocument, ChangeKind, DiffSection,
};
use serde_json::{json, Value};

fn doc(value: Value) -> BriefDocument {
    BriefDocument::from_value(value).unwrap()
}

fn sample() -> Value {
    json!({
        "executive_overview": "Initial overview.",
        "evidence_index": { "e1": {}, "e2": {} },
        "working_timeline": [
            { "time_window": "2024-01", "event": "A", "confidence": "high", "basis": "public", "source_ids": ["e1"] },
            { "time_window": "2024-02", "event": "B", "confidence": "low", "basis": "note", "source_ids": ["e2"] }
        ],
        "key_entities": [
            { "name": "Acme", "type": "organization", "source_refs": ["e1"] }
        ],
        "contradictions_tensions": [
            { "issue": "Date", "details": "Two dates", "source_refs": ["e1"] }
        ],
        "hypotheses": [
            { "statement": "H", "likelihood": "low", "evidence_for": ["e1"], "evidence_against": [] }
        ],
        "critical_gaps": [ { "missing_item": "G" } ],
        "evidence_strength": [ { "theme": "T", "supporting_refs": ["e1"] } ],
        "verification_tasks": [ "Check registry" ]
    })
}

fn summary(changes: &[brief_core::document::VersionChange]) -> Vec<(DiffSection, ChangeKind, String)> {
    changes
        .iter()
        .map(|c| (c.section, c.kind, c.label.clone()))
        .collect()
}

/// A document compared with itself has no changes.
#[test]
fn test_identity() {
    let b = doc(sample());
    assert!(compute_changes_since_last_version(&b, &b).is_empty());
    assert!(compute_changes_since_last_version(&BriefDocument::default(), &BriefDocument::default()).is_empty());
}

/// Hypotheses, gaps, and strength changes are invisible to the diff.
#[test]
fn test_excluded_sections() {
    let prev = doc(sample());
    let mut v = sample();
    v["hypotheses"][0]["likelihood"] = json!("high");
    v["hypotheses"][0]["evidence_against"] = json!(["e2"]);
    v["critical_gaps"] = json!([]);
    v["evidence_strength"][0]["supporting_refs"] = json!([]);
    let next = doc(v);
    assert!(compute_changes_since_last_version(&prev, &next).is_empty());
}

/// An overview-only change is exactly one modified entry.
#[test]
fn test_overview_only() {
    let prev = doc(sample());
    let mut v = sample();
    v["executive_overview"] = json!("Revised overview.");
    let changes = compute_changes_since_last_version(&prev, &doc(v));
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].section, DiffSection::ExecutiveOverview);
    assert_eq!(changes[0].kind, ChangeKind::Modified);
}

/// Whitespace around the overview is not a change.
#[test]
fn test_overview_trimmed() {
    let prev = doc(sample());
    let mut v = sample();
    v["executive_overview"] = json!("  Initial overview.\n");
    assert!(compute_changes_since_last_version(&prev, &doc(v)).is_empty());
}

/// Timeline compares by position: insertion at the front shifts every item.
#[test]
fn test_timeline_positional() {
    let prev = doc(sample());
    let mut v = sample();
    let items = v["working_timeline"].as_array().unwrap().clone();
    let mut shifted = vec![json!({ "event": "Z", "source_ids": ["e2"] })];
    shifted.extend(items);
    v["working_timeline"] = Value::Array(shifted);
    let changes = compute_changes_since_last_version(&prev, &doc(v));
    assert_eq!(
        summary(&changes),
        vec![
            (DiffSection::WorkingTimeline, ChangeKind::Modified, "Timeline item 0: Z".to_string()),
            (DiffSection::WorkingTimeline, ChangeKind::Modified, "Timeline item 1: A".to_string()),
            (DiffSection::WorkingTimeline, ChangeKind::Added, "Timeline item 2: B".to_string()),
        ]
    );
}

/// Removing the last item is a removal; the verified flag is not part of the fingerprint.
#[test]
fn test_timeline_removed_and_verified_flag() {
    let prev = doc(sample());
    let mut v = sample();
    v["working_timeline"].as_array_mut().unwrap().pop();
    v["working_timeline"][0]["verified"] = json!(true);
    let changes = compute_changes_since_last_version(&prev, &doc(v));
    assert_eq!(
        summary(&changes),
        vec![(DiffSection::WorkingTimeline, ChangeKind::Removed, "Timeline item 1: B".to_string())]
    );
}

/// Entities are keyed by name and type; ref edits alone are not changes.
#[test]
fn test_entities() {
    let prev = doc(sample());
    let mut v = sample();
    v["key_entities"] = json!([
        { "name": "Acme", "type": "organization", "source_refs": ["e2"] },
        { "name": "Acme", "type": "person" }
    ]);
    let changes = compute_changes_since_last_version(&prev, &doc(v));
    assert_eq!(
        summary(&changes),
        vec![(DiffSection::KeyEntities, ChangeKind::Added, "Acme (person)".to_string())]
    );
}

/// Contradictions are keyed by trimmed issue and compared by content.
#[test]
fn test_contradictions() {
    let prev = doc(sample());
    let mut v = sample();
    v["contradictions_tensions"] = json!([
        { "issue": "Date", "details": "Three dates", "source_refs": ["e1"] },
        { "issue": "Amount", "details": "", "source_refs": [] }
    ]);
    let changes = compute_changes_since_last_version(&prev, &doc(v));
    assert_eq!(
        summary(&changes),
        vec![
            (DiffSection::ContradictionsTensions, ChangeKind::Modified, "Date".to_string()),
            (DiffSection::ContradictionsTensions, ChangeKind::Added, "Amount".to_string()),
        ]
    );
    assert_eq!(changes[0].detail.as_deref(), Some("changed: details"));

    let mut v = sample();
    v["contradictions_tensions"] = json!([]);
    let changes = compute_changes_since_last_version(&prev, &doc(v));
    assert_eq!(
        summary(&changes),
        vec![(DiffSection::ContradictionsTensions, ChangeKind::Removed, "Date".to_string())]
    );
}

/// Tasks are a set keyed by trimmed text; string and object forms compare equal.
#[test]
fn test_tasks() {
    let prev = doc(sample());
    let mut v = sample();
    v["verification_tasks"] = json!([
        { "task": " Check registry ", "priority": "high" },
        "Interview witness"
    ]);
    let changes = compute_changes_since_last_version(&prev, &doc(v));
    assert_eq!(
        summary(&changes),
        vec![(DiffSection::VerificationTasks, ChangeKind::Added, "Interview witness".to_string())]
    );
}

/// Sections always appear in fixed order.
#[test]
fn test_section_order() {
    let prev = doc(sample());
    let next = doc(json!({
        "executive_overview": "New.",
        "verification_tasks": ["Other"],
        "key_entities": [ { "name": "Beta", "type": "organization" } ]
    }));
    let changes = compute_changes_since_last_version(&prev, &next);
    let sections: Vec<DiffSection> = changes.iter().map(|c| c.section).collect();
    let mut sorted = sections.clone();
    sorted.sort();
    assert_eq!(sections, sorted);
    assert_eq!(sections.first(), Some(&DiffSection::ExecutiveOverview));
    assert_eq!(sections.last(), Some(&DiffSection::VerificationTasks));
}

/// The cache serves the same result until either side is edited.
#[test]
fn test_cache_invalidated_by_edits() {
    let cache = DiffCache::new(16);
    let prev = doc(sample());
    let mut v = sample();
    v["executive_overview"] = json!("Revised overview.");
    let next = doc(v);

    let first = cache.changes(&prev, &next).unwrap();
    let again = cache.changes(&prev, &next).unwrap();
    assert!(Arc::ptr_eq(&first, &again));

    let noted = with_user_note(&next, "Reviewed by editor");
    assert!(!cache.contains(&prev, &noted).unwrap());
    let flagged = with_timeline_verified(&next, 0, true).unwrap();
    assert!(!cache.contains(&prev, &flagged).unwrap());

    let after_edit = cache.changes(&prev, &flagged).unwrap();
    assert_eq!(*after_edit, *first);
    assert!(!Arc::ptr_eq(&first, &after_edit));
}
