//! Structured span field names shared by the analyzers.
//!
//! Keeping field names in one place lets log queries filter on the same
//! keys no matter which analyzer emitted the event.

/// Number of entries in the evidence index.
pub const EVIDENCE_COUNT: &str = "evidence_count";

/// Refs dropped because their id is not in the evidence index.
pub const DANGLING_REFS: &str = "dangling_refs";

/// Rounded integrity score (0-100).
pub const INTEGRITY_SCORE: &str = "integrity_score";

/// Number of coherence alerts emitted.
pub const ALERT_COUNT: &str = "alert_count";

/// Number of single-point failures found.
pub const SINGLE_POINT_FAILURES: &str = "single_point_failures";

/// Number of version changes between two documents.
pub const CHANGE_COUNT: &str = "change_count";

/// Wall time of a full analysis pass in microseconds.
pub const ANALYSIS_TIME_US: &str = "analysis_time_us";
