//! Alert severities and alert records.

use std::fmt;

/// Classification tier for a sample, a vitals reading or an event.
///
/// Ordered so that the worst of several severities is simply their `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Critical,
}

impl Severity {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Normal => "OK",
            Severity::Warning => "WARN",
            Severity::Critical => "CRIT",
        }
    }

    /// Word used by the line status indicator.
    pub fn line_status(&self) -> &'static str {
        match self {
            Severity::Normal => "OPTIMAL",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        }
    }

    /// Word used by the system health panel.
    pub fn health_label(&self) -> &'static str {
        match self {
            Severity::Normal => "Excellent",
            Severity::Warning => "Warning",
            Severity::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Normal => "normal",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        };
        f.write_str(name)
    }
}

/// A message raised by the simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Alert {
    pub message: String,
    pub severity: Severity,
    /// Unix milliseconds.
    pub created_at_ms: u64,
}

impl Alert {
    pub fn new(message: impl Into<String>, severity: Severity, created_at_ms: u64) -> Self {
        Self {
            message: message.into(),
            severity,
            created_at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_orders_worst_last() {
        assert!(Severity::Normal < Severity::Warning);
        assert!(Severity::Warning < Severity::Critical);
        let worst = [Severity::Warning, Severity::Critical, Severity::Normal]
            .into_iter()
            .max()
            .unwrap();
        assert_eq!(worst, Severity::Critical);
    }

    #[test]
    fn severity_labels() {
        assert_eq!(Severity::Normal.line_status(), "OPTIMAL");
        assert_eq!(Severity::Critical.health_label(), "Critical");
        assert_eq!(Severity::Warning.to_string(), "warning");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn severity_serializes_lowercase() {
        let alert = Alert::new("Simulation check", Severity::Critical, 7);
        let json = serde_json::to_string(&alert).unwrap();
        assert!(json.contains("\"severity\":\"critical\""));
        let back: Alert = serde_json::from_str(&json).unwrap();
        assert_eq!(back, alert);
    }
}
