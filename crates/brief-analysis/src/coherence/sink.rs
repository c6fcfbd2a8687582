//! Alert accumulator local to one pass.

use brief_core::document::{AlertSeverity, CoherenceAlert};
use brief_core::types::FxHashSet;

#[derive(Debug)]
pub struct AlertSink {
    cap: usize,
    seen: FxHashSet<(AlertSeverity, String)>,
    alerts: Vec<CoherenceAlert>,
    duplicates: usize,
}

impl AlertSink {
    pub fn new(cap: usize) -> Self {
        Self {
            cap,
            seen: FxHashSet::default(),
            alerts: Vec::new(),
            duplicates: 0,
        }
    }

    pub fn is_full(&self) -> bool {
        self.alerts.len() >= self.cap
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }

    /// Alerts dropped because an identical (severity, text) was already kept.
    pub fn duplicates(&self) -> usize {
        self.duplicates
    }

    /// Keeps the alert unless the sink is full or it repeats an earlier one.
    /// Returns whether it was kept.
    pub fn push(&mut self, alert: CoherenceAlert) -> bool {
        if self.is_full() {
            return false;
        }
        if !self.seen.insert((alert.severity, alert.alert.clone())) {
            self.duplicates += 1;
            return false;
        }
        self.alerts.push(alert);
        true
    }

    pub fn into_alerts(self) -> Vec<CoherenceAlert> {
        self.alerts
    }
}
