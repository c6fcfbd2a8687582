//! Shared constants for the brief analysis engine.

/// Engine version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Network caps ----

/// Maximum number of central nodes reported.
pub const DEFAULT_CENTRAL_NODE_CAP: usize = 5;

/// Maximum number of isolated nodes reported.
pub const DEFAULT_ISOLATED_NODE_CAP: usize = 10;

/// Maximum number of single-point failures reported (timeline and
/// contradictions share the cap).
pub const DEFAULT_SINGLE_POINT_FAILURE_CAP: usize = 10;

/// Minimum mention count for an id to be reported as central. Uncited ids
/// are never central.
pub const DEFAULT_MIN_CENTRAL_MENTIONS: u32 = 1;

// ---- Coherence ----

/// Maximum number of coherence alerts reported.
pub const DEFAULT_COHERENCE_ALERT_CAP: usize = 10;

/// Share of social/unverified refs above which a high-confidence event is flagged.
pub const LOW_CREDIBILITY_SHARE_THRESHOLD: f64 = 0.5;

// ---- Integrity sub-score maxima ----

pub const TIMELINE_MAX: f64 = 25.0;
pub const CONTRADICTION_MAX: f64 = 20.0;
pub const GAP_MAX: f64 = 15.0;
pub const CREDIBILITY_MAX: f64 = 20.0;
pub const HYPOTHESIS_MAX: f64 = 20.0;
pub const DEPTH_MAX: f64 = 5.0;

/// Maximum number of drivers and of weak points.
pub const DEFAULT_DRIVER_CAP: usize = 4;

/// Minimum valid refs for a timeline event to count as corroborated.
pub const CORROBORATION_MIN_REFS: usize = 2;

// ---- Grade boundaries (inclusive lower bounds on the rounded score) ----

pub const GRADE_A_MIN: u32 = 90;
pub const GRADE_B_MIN: u32 = 80;
pub const GRADE_C_MIN: u32 = 70;
pub const GRADE_D_MIN: u32 = 60;

// ---- Credibility weights ----

pub const WEIGHT_OFFICIAL: f64 = 1.0;
pub const WEIGHT_PRIMARY: f64 = 1.0;
pub const WEIGHT_SECONDARY: f64 = 0.8;
pub const WEIGHT_GOV_HOST: f64 = 1.0;
pub const WEIGHT_OTHER_URL: f64 = 0.5;
pub const WEIGHT_INTERNAL: f64 = 0.3;
pub const WEIGHT_UNVERIFIED: f64 = 0.0;

/// Share above which one category group dominates the credibility summary.
pub const MAJORITY_SHARE: f64 = 0.5;
