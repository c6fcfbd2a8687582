//! Document errors: input that cannot be read as a brief, and rejected edits.

use super::error_code::{self, BriefErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Brief document is not valid JSON: {0}")]
    Parse(serde_json::Error),

    #[error("Brief document must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    #[error("Brief document could not be serialized: {0}")]
    Serialize(serde_json::Error),

    #[error("Timeline index {index} out of range (timeline has {len} items)")]
    TimelineIndexOutOfRange { index: usize, len: usize },
}

impl BriefErrorCode for DocumentError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(_) => error_code::DOCUMENT_PARSE_ERROR,
            Self::NotAnObject { .. } => error_code::DOCUMENT_SHAPE_ERROR,
            Self::Serialize(_) => error_code::DOCUMENT_SERIALIZE_ERROR,
            Self::TimelineIndexOutOfRange { .. } => error_code::EDIT_REJECTED,
        }
    }
}
