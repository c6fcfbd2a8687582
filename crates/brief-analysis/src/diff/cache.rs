//! Diff cache keyed by content fingerprints.
//!
//! Any edit (note, verified flag) changes a document's fingerprint, so a
//! cached diff can never be served against a stale version.

use std::sync::Arc;
use std::time::Duration;

use brief_core::document::{document_fingerprint, BriefDocument, VersionChange};
use brief_core::errors::DocumentError;
use moka::sync::Cache;

use super::sections::compute_changes_since_last_version;

/// Default number of cached version pairs.
pub const DEFAULT_DIFF_CACHE_CAPACITY: u64 = 256;

pub struct DiffCache {
    cache: Cache<(u64, u64), Arc<Vec<VersionChange>>>,
}

impl DiffCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    /// Changes from `prev` to `next`, computed at most once per pair of
    /// document contents.
    pub fn changes(
        &self,
        prev: &BriefDocument,
        next: &BriefDocument,
    ) -> Result<Arc<Vec<VersionChange>>, DocumentError> {
        let key = (document_fingerprint(prev)?, document_fingerprint(next)?);
        Ok(self
            .cache
            .get_with(key, || Arc::new(compute_changes_since_last_version(prev, next))))
    }

    pub fn contains(&self, prev: &BriefDocument, next: &BriefDocument) -> Result<bool, DocumentError> {
        let key = (document_fingerprint(prev)?, document_fingerprint(next)?);
        Ok(self.cache.contains_key(&key))
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl Default for DiffCache {
    fn default() -> Self {
        Self::new(DEFAULT_DIFF_CACHE_CAPACITY)
    }
}
