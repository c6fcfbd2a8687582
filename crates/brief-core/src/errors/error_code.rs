//! BriefErrorCode trait for structured error reporting to callers.

/// Every error enum implements this to expose a stable code string that
/// the web layer can forward without parsing messages.
pub trait BriefErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const DOCUMENT_PARSE_ERROR: &str = "DOCUMENT_PARSE_ERROR";
pub const DOCUMENT_SHAPE_ERROR: &str = "DOCUMENT_SHAPE_ERROR";
pub const DOCUMENT_SERIALIZE_ERROR: &str = "DOCUMENT_SERIALIZE_ERROR";
pub const EDIT_REJECTED: &str = "EDIT_REJECTED";
