//! The three consistency checks. Each returns early once the sink is full.

use brief_core::constants::LOW_CREDIBILITY_SHARE_THRESHOLD;
use brief_core::document::{
    AlertSeverity, BriefDocument, CoherenceAlert, Level, TimelineItem,
};

use super::sink::AlertSink;
use crate::lookup::EvidenceLookup;

const TIMELINE_SECTION: &str = "working_timeline";
const CONTRADICTION_SECTION: &str = "contradictions_tensions";
const EVIDENCE_SECTION: &str = "evidence_index";

/// Verified events resting on zero or one valid ref.
pub fn verified_with_thin_support(
    doc: &BriefDocument,
    lookup: &EvidenceLookup<'_>,
    sink: &mut AlertSink,
) {
    for (i, item) in doc.working_timeline.iter().enumerate() {
        if sink.is_full() {
            return;
        }
        if !item.is_verified() {
            continue;
        }
        let refs = lookup.valid_refs(item.refs());
        if refs.len() > 1 {
            continue;
        }
        sink.push(CoherenceAlert {
            severity: AlertSeverity::High,
            alert: format!(
                "Timeline event {} is marked verified but rests on zero or one reference.",
                describe_event(i, item)
            ),
            why_it_matters: "A verified event should be confirmed by at least two independent \
                             sources; a single citation cannot be cross-checked."
                .to_string(),
            affected_sections: vec![TIMELINE_SECTION.to_string()],
            related_evidence_ids: refs.iter().map(|id| id.to_string()).collect(),
        });
    }
}

/// High-confidence events whose valid refs are mostly social or unverified.
pub fn high_confidence_on_weak_sources(
    doc: &BriefDocument,
    lookup: &EvidenceLookup<'_>,
    sink: &mut AlertSink,
) {
    for (i, item) in doc.working_timeline.iter().enumerate() {
        if sink.is_full() {
            return;
        }
        if item.confidence != Level::High {
            continue;
        }
        let refs = lookup.valid_refs(item.refs());
        if refs.is_empty() {
            continue;
        }
        let weak = refs
            .iter()
            .filter(|id| {
                lookup
                    .category(id)
                    .map(|c| c.is_low_credibility())
                    .unwrap_or(false)
            })
            .count();
        let share = weak as f64 / refs.len() as f64;
        if share <= LOW_CREDIBILITY_SHARE_THRESHOLD {
            continue;
        }
        sink.push(CoherenceAlert {
            severity: AlertSeverity::High,
            alert: format!(
                "High-confidence timeline event {} relies mostly on social or unverified sources ({} of {}).",
                describe_event(i, item),
                weak,
                refs.len()
            ),
            why_it_matters: "High confidence overstates the support when most citations are \
                             social posts or material nobody has checked."
                .to_string(),
            affected_sections: vec![TIMELINE_SECTION.to_string(), EVIDENCE_SECTION.to_string()],
            related_evidence_ids: refs.iter().map(|id| id.to_string()).collect(),
        });
    }
}

/// Contradictions without resolution tasks. Legacy records never have any.
pub fn unresolved_contradictions(
    doc: &BriefDocument,
    lookup: &EvidenceLookup<'_>,
    sink: &mut AlertSink,
) {
    for (i, c) in doc.contradictions_tensions.iter().enumerate() {
        if sink.is_full() {
            return;
        }
        if !c.resolution_tasks().is_empty() {
            continue;
        }
        let issue = c.issue().trim();
        let name = if issue.is_empty() {
            format!("#{}", i + 1)
        } else {
            format!("\"{issue}\"")
        };
        sink.push(CoherenceAlert {
            severity: AlertSeverity::High,
            alert: format!("Contradiction {name} has no resolution tasks."),
            why_it_matters: "Without a concrete way to resolve it, the tension stays open and \
                             can undermine conclusions drawn from either side."
                .to_string(),
            affected_sections: vec![CONTRADICTION_SECTION.to_string()],
            related_evidence_ids: lookup
                .valid_refs(c.all_refs())
                .iter()
                .map(|id| id.to_string())
                .collect(),
        });
    }
}

/// Quoted event text, falling back to the time window, then the position.
fn describe_event(i: usize, item: &TimelineItem) -> String {
    let event = item.event.trim();
    if !event.is_empty() {
        return format!("\"{event}\"");
    }
    let window = item.time_window.trim();
    if !window.is_empty() {
        return format!("at {window}");
    }
    format!("#{}", i + 1)
}
