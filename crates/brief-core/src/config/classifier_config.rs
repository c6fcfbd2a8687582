//! Classifier configuration: domain lists added on top of the built-ins.

use serde::{Deserialize, Serialize};

/// Extra patterns for the evidence classifier.
///
/// Entries extend the compiled-in lists; they never replace them, so a
/// config file cannot make a `.gov` host lose its official status.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Additional news hosts (matched with subdomains).
    pub extra_news_domains: Vec<String>,
    /// Additional social-platform hosts (matched with subdomains).
    pub extra_social_domains: Vec<String>,
    /// Additional host suffixes treated as official, e.g. `.gov.uk`.
    pub extra_official_suffixes: Vec<String>,
    /// Additional evidence `type` values treated as internal-only.
    pub extra_internal_types: Vec<String>,
}

impl ClassifierConfig {
    pub fn is_empty(&self) -> bool {
        self.extra_news_domains.is_empty()
            && self.extra_social_domains.is_empty()
            && self.extra_official_suffixes.is_empty()
            && self.extra_internal_types.is_empty()
    }
}
