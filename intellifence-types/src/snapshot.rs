//! Point-in-time view of a simulation, as handed to the presentation layer.

use crate::{Alert, FenceProfile, MetricStats, Severity, SystemVitals, TelemetrySample};

/// Whether the simulation timer is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Lifecycle {
    #[default]
    Stopped,
    Running,
}

impl Lifecycle {
    pub fn is_running(&self) -> bool {
        matches!(self, Lifecycle::Running)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Lifecycle::Stopped => "System Online",
            Lifecycle::Running => "Simulation Running",
        }
    }
}

/// Everything a dashboard needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DashboardSnapshot {
    pub fence: FenceProfile,
    pub lifecycle: Lifecycle,
    /// Ticks processed since the fence was selected.
    pub tick: u64,
    pub latest: TelemetrySample,
    pub previous: TelemetrySample,
    /// Classification of `latest`.
    pub line_severity: Severity,
    pub stats: MetricStats,
    pub vitals: SystemVitals,
    pub vitals_severity: Severity,
    /// Most recent first.
    pub alerts: Vec<Alert>,
    /// Oldest first.
    pub history: Vec<TelemetrySample>,
    /// Unix milliseconds.
    pub taken_at_ms: u64,
}

impl DashboardSnapshot {
    /// Worst of the line and vitals severities.
    pub fn overall_severity(&self) -> Severity {
        self.line_severity.max(self.vitals_severity)
    }

    /// Number of alerts at each severity: (normal, warning, critical).
    pub fn alert_counts(&self) -> (usize, usize, usize) {
        self.alerts.iter().fold((0, 0, 0), |(n, w, c), alert| match alert.severity {
            Severity::Normal => (n + 1, w, c),
            Severity::Warning => (n, w + 1, c),
            Severity::Critical => (n, w, c + 1),
        })
    }
}
