//! Integrity scoring: six sub-scores, a 0-100 total, and a letter grade.

pub mod findings;
pub mod scorer;
pub mod types;

pub use scorer::{compute_integrity_score, grade_for, IntegrityScorer};
pub use types::IntegrityBreakdown;
