//! Content fingerprint of a brief, used to key cached diffs.

use std::io;

use serde::Serialize;
use serde_json::Value;
use xxhash_rust::xxh3::Xxh3;

use super::{
    BriefDocument, Contradiction, CriticalGap, EvidenceIndex, EvidenceStrengthEntry,
    Hypothesis, KeyEntity, TimelineItem, VerificationTask,
};
use crate::errors::DocumentError;
use crate::types::collections::BTreeMap;

/// Everything a user or the generator authored; derived fields excluded.
#[derive(Serialize)]
struct ContentView<'a> {
    executive_overview: &'a str,
    evidence_index: &'a EvidenceIndex,
    working_timeline: &'a [TimelineItem],
    key_entities: &'a [KeyEntity],
    contradictions_tensions: &'a [Contradiction],
    hypotheses: &'a [Hypothesis],
    critical_gaps: &'a [CriticalGap],
    evidence_strength: &'a [EvidenceStrengthEntry],
    verification_tasks: &'a [VerificationTask],
    user_note: Option<&'a str>,
    extra: &'a BTreeMap<String, Value>,
}

struct HashWriter(Xxh3);

impl io::Write for HashWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// xxh3 of the document's canonical JSON content.
///
/// Re-running analysis does not change the fingerprint; editing the note
/// or a `verified` flag does.
pub fn document_fingerprint(doc: &BriefDocument) -> Result<u64, DocumentError> {
    let view = ContentView {
        executive_overview: &doc.executive_overview,
        evidence_index: &doc.evidence_index,
        working_timeline: &doc.working_timeline,
        key_entities: &doc.key_entities,
        contradictions_tensions: &doc.contradictions_tensions,
        hypotheses: &doc.hypotheses,
        critical_gaps: &doc.critical_gaps,
        evidence_strength: &doc.evidence_strength,
        verification_tasks: &doc.verification_tasks,
        user_note: doc.user_note.as_deref(),
        extra: &doc.extra,
    };
    let mut writer = HashWriter(Xxh3::new());
    serde_json::to_writer(&mut writer, &view).map_err(DocumentError::Serialize)?;
    Ok(writer.0.digest())
}
