//! Snapshot plus derived display values.

use std::time::Instant;

use intellifence_types::{DashboardSnapshot, Severity, Trend};

use super::trend::Sparklines;

/// Everything the views need for one frame.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub snapshot: DashboardSnapshot,
    /// Latest sample against the previous one.
    pub trend: Trend,
    pub sparklines: Sparklines,
    /// When this frame was received, for the "Updated" label.
    pub last_updated: Instant,
}

impl DashboardData {
    pub fn from_snapshot(snapshot: DashboardSnapshot) -> Self {
        let trend = snapshot.latest.delta_from(&snapshot.previous);
        let sparklines = Sparklines::from_samples(&snapshot.history);
        Self {
            snapshot,
            trend,
            sparklines,
            last_updated: Instant::now(),
        }
    }

    pub fn overall_severity(&self) -> Severity {
        self.snapshot.overall_severity()
    }

    /// Share of alerts at each severity, as whole percentages summing to 100.
    ///
    /// Used for the alert-mix bar. Empty history counts as all normal.
    pub fn alert_mix(&self) -> (u16, u16, u16) {
        let (normal, warning, critical) = self.snapshot.alert_counts();
        let total = normal + warning + critical;
        if total == 0 {
            return (100, 0, 0);
        }
        let warning_pct = (warning * 100 / total) as u16;
        let critical_pct = (critical * 100 / total) as u16;
        (100 - warning_pct - critical_pct, warning_pct, critical_pct)
    }
}
