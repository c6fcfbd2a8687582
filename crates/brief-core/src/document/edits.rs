//! The two edits a user may make to a stored brief.
//!
//! Both return a new document; the stored version is never touched. Neither
//! re-runs the analyzers, but both change the document fingerprint, so any
//! cached diff involving the old version stops matching.

use super::BriefDocument;
use crate::errors::DocumentError;

/// Replace the free-text note. A blank note clears it.
pub fn with_user_note(doc: &BriefDocument, note: impl Into<String>) -> BriefDocument {
    let note = note.into();
    let trimmed = note.trim();
    BriefDocument {
        user_note: if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        },
        ..doc.clone()
    }
}

/// Set the `verified` flag on one timeline item.
pub fn with_timeline_verified(
    doc: &BriefDocument,
    index: usize,
    verified: bool,
) -> Result<BriefDocument, DocumentError> {
    let len = doc.working_timeline.len();
    if index >= len {
        return Err(DocumentError::TimelineIndexOutOfRange { index, len });
    }
    let mut next = doc.clone();
    next.working_timeline[index].verified = Some(verified);
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::TimelineItem;

    fn doc_with_events(n: usize) -> BriefDocument {
        BriefDocument {
            working_timeline: (0..n)
                .map(|i| TimelineItem {
                    event: format!("event {i}"),
                    ..TimelineItem::default()
                })
                .collect(),
            ..BriefDocument::default()
        }
    }

    #[test]
    fn verified_edit_leaves_input_untouched() {
        let doc = doc_with_events(2);
        let edited = with_timeline_verified(&doc, 1, true).unwrap();
        assert_eq!(doc.working_timeline[1].verified, None);
        assert!(edited.working_timeline[1].is_verified());
    }

    #[test]
    fn verified_edit_out_of_range() {
        let doc = doc_with_events(1);
        let err = with_timeline_verified(&doc, 3, true).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::TimelineIndexOutOfRange { index: 3, len: 1 }
        ));
    }

    #[test]
    fn blank_note_clears() {
        let doc = with_user_note(&BriefDocument::default(), "  call the clerk ");
        assert_eq!(doc.user_note.as_deref(), Some("call the clerk"));
        let cleared = with_user_note(&doc, "   ");
        assert_eq!(cleared.user_note, None);
    }
}
