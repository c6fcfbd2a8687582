//! Evidence classifier.
//!
//! Category and weight come out of one precedence walk so they can never
//! disagree:
//!
//! 1. `official_source: true` → official, 1.0
//! 2. primary tier → official, 1.0
//! 3. `.gov` host → official, 1.0
//! 4. news host → news
//! 5. social host → social
//! 6. no URL and an internal `type` → internal, 0.3
//! 7. any other URL → other; nothing at all → unverified, 0.0
//!
//! A secondary tier fixes the weight at 0.8 but the category still comes
//! from the URL. Every URL not covered above weighs 0.5.

use std::fmt;
use std::sync::LazyLock;

use brief_core::config::ClassifierConfig;
use brief_core::constants::{
    WEIGHT_GOV_HOST, WEIGHT_INTERNAL, WEIGHT_OFFICIAL, WEIGHT_OTHER_URL, WEIGHT_PRIMARY,
    WEIGHT_SECONDARY, WEIGHT_UNVERIFIED,
};
use brief_core::document::{EvidenceEntry, SourceTier};
use brief_core::types::FxHashSet;
use serde::{Deserialize, Serialize};
use url::Url;

use super::domains;

/// Credibility category of one evidence entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceCategory {
    Official,
    News,
    Social,
    Internal,
    Unverified,
    Other,
}

impl EvidenceCategory {
    pub const ALL: [EvidenceCategory; 6] = [
        Self::Official,
        Self::News,
        Self::Social,
        Self::Internal,
        Self::Unverified,
        Self::Other,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Official => "official",
            Self::News => "news",
            Self::Social => "social",
            Self::Internal => "internal",
            Self::Unverified => "unverified",
            Self::Other => "other",
        }
    }

    /// Social posts and unsourced material.
    pub fn is_low_credibility(self) -> bool {
        matches!(self, Self::Social | Self::Unverified)
    }
}

impl fmt::Display for EvidenceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category and weight decided together.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SourceAssessment {
    pub category: EvidenceCategory,
    pub weight: f64,
}

impl SourceAssessment {
    fn new(category: EvidenceCategory, weight: f64) -> Self {
        Self { category, weight }
    }
}

/// Classifier over the built-in host lists plus configured extras.
#[derive(Debug, Clone)]
pub struct EvidenceClassifier {
    news: FxHashSet<String>,
    social: FxHashSet<String>,
    official_suffixes: Vec<String>,
    internal_types: FxHashSet<String>,
}

static DEFAULT_CLASSIFIER: LazyLock<EvidenceClassifier> =
    LazyLock::new(|| EvidenceClassifier::new(&ClassifierConfig::default()));

impl EvidenceClassifier {
    pub fn new(config: &ClassifierConfig) -> Self {
        let news = domains::NEWS_DOMAINS
            .iter()
            .map(|d| d.to_string())
            .chain(config.extra_news_domains.iter().filter_map(|d| normalize_domain(d)))
            .collect();
        let social = domains::SOCIAL_DOMAINS
            .iter()
            .map(|d| d.to_string())
            .chain(config.extra_social_domains.iter().filter_map(|d| normalize_domain(d)))
            .collect();
        let mut official_suffixes: Vec<String> =
            domains::OFFICIAL_SUFFIXES.iter().map(|s| s.to_string()).collect();
        for suffix in &config.extra_official_suffixes {
            let suffix = suffix.trim().to_ascii_lowercase();
            if !suffix.is_empty() && !official_suffixes.contains(&suffix) {
                official_suffixes.push(suffix);
            }
        }
        let internal_types = domains::INTERNAL_TYPES
            .iter()
            .map(|t| t.to_string())
            .chain(
                config
                    .extra_internal_types
                    .iter()
                    .map(|t| t.trim().to_ascii_lowercase())
                    .filter(|t| !t.is_empty()),
            )
            .collect();

        Self {
            news,
            social,
            official_suffixes,
            internal_types,
        }
    }

    /// Process-wide classifier with no configured extras.
    pub fn shared() -> &'static EvidenceClassifier {
        &DEFAULT_CLASSIFIER
    }

    pub fn assess(&self, entry: &EvidenceEntry) -> SourceAssessment {
        if entry.is_official_source() {
            return SourceAssessment::new(EvidenceCategory::Official, WEIGHT_OFFICIAL);
        }
        match entry.tier() {
            SourceTier::Primary => {
                return SourceAssessment::new(EvidenceCategory::Official, WEIGHT_PRIMARY)
            }
            SourceTier::Secondary => {
                return SourceAssessment::new(self.category_from_source(entry), WEIGHT_SECONDARY)
            }
            SourceTier::Unknown => {}
        }

        let category = self.category_from_source(entry);
        let weight = match category {
            EvidenceCategory::Official => WEIGHT_GOV_HOST,
            EvidenceCategory::Internal => WEIGHT_INTERNAL,
            EvidenceCategory::Unverified => WEIGHT_UNVERIFIED,
            EvidenceCategory::News | EvidenceCategory::Social | EvidenceCategory::Other => {
                WEIGHT_OTHER_URL
            }
        };
        SourceAssessment::new(category, weight)
    }

    pub fn classify(&self, entry: &EvidenceEntry) -> EvidenceCategory {
        self.assess(entry).category
    }

    pub fn weight(&self, entry: &EvidenceEntry) -> f64 {
        self.assess(entry).weight
    }

    /// Steps 3-7: decided from the URL host, or from `type` when there is no URL.
    fn category_from_source(&self, entry: &EvidenceEntry) -> EvidenceCategory {
        let Some(raw) = entry.url() else {
            return if self.is_internal_type(entry) {
                EvidenceCategory::Internal
            } else {
                EvidenceCategory::Unverified
            };
        };
        let Some(host) = url_host(raw) else {
            return EvidenceCategory::Other;
        };

        if self.official_suffixes.iter().any(|s| host.ends_with(s.as_str())) {
            EvidenceCategory::Official
        } else if host_in(&self.news, &host) {
            EvidenceCategory::News
        } else if host_in(&self.social, &host) {
            EvidenceCategory::Social
        } else {
            EvidenceCategory::Other
        }
    }

    fn is_internal_type(&self, entry: &EvidenceEntry) -> bool {
        entry
            .kind
            .as_deref()
            .map(|k| self.internal_types.contains(&k.trim().to_ascii_lowercase()))
            .unwrap_or(false)
    }
}

impl Default for EvidenceClassifier {
    fn default() -> Self {
        Self::shared().clone()
    }
}

/// Category under the built-in lists.
pub fn classify_evidence_entry(entry: &EvidenceEntry) -> EvidenceCategory {
    EvidenceClassifier::shared().classify(entry)
}

/// Weight in `[0, 1]` under the built-in lists.
pub fn credibility_weight(entry: &EvidenceEntry) -> f64 {
    EvidenceClassifier::shared().weight(entry)
}

/// Lowercased host of `raw`, which may lack a scheme.
fn url_host(raw: &str) -> Option<String> {
    let url = match Url::parse(raw) {
        Ok(url) => url,
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            Url::parse(&format!("https://{raw}")).ok()?
        }
        Err(_) => return None,
    };
    let host = url.host_str()?.trim_end_matches('.').to_ascii_lowercase();
    (!host.is_empty()).then_some(host)
}

/// True when `host` or one of its parent domains is listed.
fn host_in(domains: &FxHashSet<String>, host: &str) -> bool {
    let mut candidate = host;
    loop {
        if domains.contains(candidate) {
            return true;
        }
        match candidate.split_once('.') {
            Some((_, rest)) if !rest.is_empty() => candidate = rest,
            _ => return false,
        }
    }
}

fn normalize_domain(raw: &str) -> Option<String> {
    let d = raw.trim().trim_start_matches('.').to_ascii_lowercase();
    (!d.is_empty()).then_some(d)
}
