//! Threshold classification of samples and vitals.

use intellifence_types::{Severity, SystemVitals, TelemetrySample};

use crate::config::Thresholds;

/// Maps readings to a [`Severity`]. Pure: no state, no side effects.
#[derive(Debug, Clone, Default)]
pub struct AlertClassifier {
    thresholds: Thresholds,
}

impl AlertClassifier {
    pub fn new(thresholds: Thresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// Classify a line reading.
    ///
    /// Critical when voltage leaves the tolerance band or current passes the
    /// peak threshold; warning when voltage leaves the optimal band or
    /// current passes the warning threshold.
    pub fn classify(&self, sample: &TelemetrySample) -> Severity {
        let t = &self.thresholds;

        let voltage = if !t.voltage_tolerance.contains(sample.voltage) {
            Severity::Critical
        } else if !t.voltage_optimal.contains(sample.voltage) {
            Severity::Warning
        } else {
            Severity::Normal
        };

        let current = if sample.current > t.current_critical {
            Severity::Critical
        } else if sample.current > t.current_warning {
            Severity::Warning
        } else {
            Severity::Normal
        };

        voltage.max(current)
    }

    /// Classify the monitoring unit's own health.
    pub fn classify_vitals(&self, vitals: &SystemVitals) -> Severity {
        let t = &self.thresholds;
        if vitals.cpu_percent > t.cpu_critical
            || vitals.memory_percent > t.memory_critical
            || vitals.temperature_c > t.temperature_critical
        {
            Severity::Critical
        } else if vitals.cpu_percent > t.cpu_warning
            || vitals.memory_percent > t.memory_warning
            || vitals.temperature_c > t.temperature_warning
        {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// Message for an alert raised from a classified sample.
    pub fn describe(&self, sample: &TelemetrySample, severity: Severity) -> String {
        let t = &self.thresholds;
        let voltage_off = !t.voltage_optimal.contains(sample.voltage);
        let current_high = sample.current > t.current_warning;
        let prefix = match severity {
            Severity::Critical => "Critical line condition",
            Severity::Warning => "Line deviation",
            Severity::Normal => "Line nominal",
        };
        match (voltage_off, current_high) {
            (true, true) => format!(
                "{}: {:.1} V, {:.1} A outside safe bands",
                prefix, sample.voltage, sample.current
            ),
            (true, false) => format!("{}: voltage at {:.1} V", prefix, sample.voltage),
            (false, true) => format!("{}: current at {:.1} A", prefix, sample.current),
            (false, false) => format!("{}: {:.1} V, {:.1} A", prefix, sample.voltage, sample.current),
        }
    }
}
