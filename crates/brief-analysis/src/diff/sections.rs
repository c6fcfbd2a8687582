//! Structural diff of two versions of a brief.
//!
//! Five sections are compared, always in this order: executive overview,
//! working timeline (by position), key entities (by `name::type`),
//! contradictions (by trimmed issue), verification tasks (by trimmed
//! task). Hypotheses, gaps and evidence strength never produce changes.
//! When a key repeats within one version, its first occurrence wins.

use std::collections::BTreeSet;

use brief_core::document::{
    BriefDocument, ChangeKind, Contradiction, DiffSection, EvidenceBasis, Level, TimelineItem,
    VersionChange,
};
use brief_core::types::{FxHashMap, FxHashSet};
use serde::Serialize;
use serde_json::Value;

/// Changes going from `prev` to `next`. The caller supplies them in
/// chronological order.
pub fn compute_changes_since_last_version(
    prev: &BriefDocument,
    next: &BriefDocument,
) -> Vec<VersionChange> {
    let mut changes = Vec::new();
    diff_overview(prev, next, &mut changes);
    diff_timeline(prev, next, &mut changes);
    diff_entities(prev, next, &mut changes);
    diff_contradictions(prev, next, &mut changes);
    diff_tasks(prev, next, &mut changes);
    tracing::debug!(change_count = changes.len(), "version diff computed");
    changes
}

fn change(
    section: DiffSection,
    kind: ChangeKind,
    label: impl Into<String>,
    detail: Option<String>,
) -> VersionChange {
    VersionChange {
        section,
        kind,
        label: label.into(),
        detail,
    }
}

fn diff_overview(prev: &BriefDocument, next: &BriefDocument, out: &mut Vec<VersionChange>) {
    let (a, b) = (prev.executive_overview.trim(), next.executive_overview.trim());
    if a != b {
        out.push(change(
            DiffSection::ExecutiveOverview,
            ChangeKind::Modified,
            "Executive overview",
            Some(format!(
                "{} -> {} characters",
                a.chars().count(),
                b.chars().count()
            )),
        ));
    }
}

/// What makes two timeline items at the same position equal.
#[derive(Debug, PartialEq, Eq)]
struct TimelineFingerprint<'a> {
    time_window: &'a str,
    event: &'a str,
    confidence: Level,
    basis: EvidenceBasis,
    /// Valid ref ids, sorted; order and duplicates do not matter.
    refs: BTreeSet<&'a str>,
}

impl<'a> TimelineFingerprint<'a> {
    fn of(item: &'a TimelineItem, doc: &BriefDocument) -> Self {
        Self {
            time_window: &item.time_window,
            event: &item.event,
            confidence: item.confidence,
            basis: item.basis,
            refs: item
                .refs()
                .iter()
                .filter(|r| doc.has_evidence(r))
                .map(String::as_str)
                .collect(),
        }
    }

    fn changed_fields(&self, other: &Self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.time_window != other.time_window {
            fields.push("time_window");
        }
        if self.event != other.event {
            fields.push("event");
        }
        if self.confidence != other.confidence {
            fields.push("confidence");
        }
        if self.basis != other.basis {
            fields.push("basis");
        }
        if self.refs != other.refs {
            fields.push("source_ids");
        }
        fields
    }
}

fn timeline_label(i: usize, item: &TimelineItem) -> String {
    let event = item.event.trim();
    if event.is_empty() {
        format!("Timeline item {i}")
    } else {
        format!("Timeline item {i}: {event}")
    }
}

fn diff_timeline(prev: &BriefDocument, next: &BriefDocument, out: &mut Vec<VersionChange>) {
    let (a, b) = (&prev.working_timeline, &next.working_timeline);
    for i in 0..a.len().max(b.len()) {
        match (a.get(i), b.get(i)) {
            (Some(old), Some(new)) => {
                let (fa, fb) = (
                    TimelineFingerprint::of(old, prev),
                    TimelineFingerprint::of(new, next),
                );
                if fa != fb {
                    out.push(change(
                        DiffSection::WorkingTimeline,
                        ChangeKind::Modified,
                        timeline_label(i, new),
                        Some(format!("changed: {}", fa.changed_fields(&fb).join(", "))),
                    ));
                }
            }
            (Some(old), None) => out.push(change(
                DiffSection::WorkingTimeline,
                ChangeKind::Removed,
                timeline_label(i, old),
                None,
            )),
            (None, Some(new)) => out.push(change(
                DiffSection::WorkingTimeline,
                ChangeKind::Added,
                timeline_label(i, new),
                None,
            )),
            (None, None) => {}
        }
    }
}

/// First occurrence of each key, in section order.
fn keyed<'a, T>(items: &'a [T], key: impl Fn(&T) -> String) -> Vec<(String, &'a T)> {
    let mut seen = FxHashSet::default();
    items
        .iter()
        .filter_map(|item| {
            let k = key(item);
            seen.insert(k.clone()).then_some((k, item))
        })
        .collect()
}

/// Removed keys in `prev` order, then added keys in `next` order.
fn set_difference<T>(
    section: DiffSection,
    prev: &[(String, &T)],
    next: &[(String, &T)],
    label: impl Fn(&T) -> String,
    out: &mut Vec<VersionChange>,
) {
    let prev_keys: FxHashSet<&str> = prev.iter().map(|(k, _)| k.as_str()).collect();
    let next_keys: FxHashSet<&str> = next.iter().map(|(k, _)| k.as_str()).collect();
    for (k, item) in prev {
        if !next_keys.contains(k.as_str()) {
            out.push(change(section, ChangeKind::Removed, label(item), None));
        }
    }
    for (k, item) in next {
        if !prev_keys.contains(k.as_str()) {
            out.push(change(section, ChangeKind::Added, label(item), None));
        }
    }
}

fn diff_entities(prev: &BriefDocument, next: &BriefDocument, out: &mut Vec<VersionChange>) {
    let a = keyed(&prev.key_entities, |e| e.key());
    let b = keyed(&next.key_entities, |e| e.key());
    set_difference(
        DiffSection::KeyEntities,
        &a,
        &b,
        |e| {
            let kind = e.entity_type.trim();
            if kind.is_empty() {
                e.name.trim().to_string()
            } else {
                format!("{} ({kind})", e.name.trim())
            }
        },
        out,
    );
}

fn diff_contradictions(prev: &BriefDocument, next: &BriefDocument, out: &mut Vec<VersionChange>) {
    let issue_key = |c: &Contradiction| c.issue().trim().to_string();
    let a = keyed(&prev.contradictions_tensions, issue_key);
    let b = keyed(&next.contradictions_tensions, issue_key);
    let next_by_key: FxHashMap<&str, &Contradiction> =
        b.iter().map(|(k, c)| (k.as_str(), *c)).collect();
    let prev_keys: FxHashSet<&str> = a.iter().map(|(k, _)| k.as_str()).collect();

    for (k, old) in &a {
        match next_by_key.get(k.as_str()) {
            None => out.push(change(
                DiffSection::ContradictionsTensions,
                ChangeKind::Removed,
                k.clone(),
                None,
            )),
            Some(new) => {
                if let Some(detail) = changed_keys(*old, *new) {
                    out.push(change(
                        DiffSection::ContradictionsTensions,
                        ChangeKind::Modified,
                        k.clone(),
                        Some(detail),
                    ));
                }
            }
        }
    }
    for (k, _) in &b {
        if !prev_keys.contains(k.as_str()) {
            out.push(change(
                DiffSection::ContradictionsTensions,
                ChangeKind::Added,
                k.clone(),
                None,
            ));
        }
    }
}

/// Top-level JSON fields that differ between two records, `None` when the
/// serialized records are identical.
fn changed_keys<T: Serialize>(a: &T, b: &T) -> Option<String> {
    let (Ok(Value::Object(a)), Ok(Value::Object(b))) =
        (serde_json::to_value(a), serde_json::to_value(b))
    else {
        return None;
    };
    let fields: BTreeSet<&str> = a
        .keys()
        .chain(b.keys())
        .filter(|k| a.get(*k) != b.get(*k))
        .map(String::as_str)
        .collect();
    if fields.is_empty() {
        return None;
    }
    Some(format!(
        "changed: {}",
        fields.into_iter().collect::<Vec<_>>().join(", ")
    ))
}

fn diff_tasks(prev: &BriefDocument, next: &BriefDocument, out: &mut Vec<VersionChange>) {
    let a = keyed(&prev.verification_tasks, |t| t.task.trim().to_string());
    let b = keyed(&next.verification_tasks, |t| t.task.trim().to_string());
    set_difference(
        DiffSection::VerificationTasks,
        &a,
        &b,
        |t| t.task.trim().to_string(),
        out,
    );
}
