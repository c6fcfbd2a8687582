//! Version diff between two briefs, plus a fingerprint-keyed cache.

pub mod cache;
pub mod sections;

pub use cache::DiffCache;
pub use sections::compute_changes_since_last_version;
