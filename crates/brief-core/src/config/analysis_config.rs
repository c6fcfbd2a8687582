//! Analysis configuration: caps and thresholds for the analyzers.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Caps and thresholds for network, coherence, and integrity output.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum central nodes. Default: 5.
    pub central_node_cap: Option<usize>,
    /// Maximum isolated nodes. Default: 10.
    pub isolated_node_cap: Option<usize>,
    /// Joint cap on single-point failures. Default: 10.
    pub single_point_failure_cap: Option<usize>,
    /// Maximum coherence alerts. Default: 10.
    pub coherence_alert_cap: Option<usize>,
    /// Minimum mentions for a central node. Default: 1.
    pub min_central_mentions: Option<u32>,
    /// Maximum drivers and weak points each. Default: 4.
    pub driver_cap: Option<usize>,
}

impl AnalysisConfig {
    pub fn effective_central_node_cap(&self) -> usize {
        self.central_node_cap
            .unwrap_or(constants::DEFAULT_CENTRAL_NODE_CAP)
    }

    pub fn effective_isolated_node_cap(&self) -> usize {
        self.isolated_node_cap
            .unwrap_or(constants::DEFAULT_ISOLATED_NODE_CAP)
    }

    pub fn effective_single_point_failure_cap(&self) -> usize {
        self.single_point_failure_cap
            .unwrap_or(constants::DEFAULT_SINGLE_POINT_FAILURE_CAP)
    }

    pub fn effective_coherence_alert_cap(&self) -> usize {
        self.coherence_alert_cap
            .unwrap_or(constants::DEFAULT_COHERENCE_ALERT_CAP)
    }

    pub fn effective_min_central_mentions(&self) -> u32 {
        self.min_central_mentions
            .unwrap_or(constants::DEFAULT_MIN_CENTRAL_MENTIONS)
    }

    pub fn effective_driver_cap(&self) -> usize {
        self.driver_cap.unwrap_or(constants::DEFAULT_DRIVER_CAP)
    }
}
