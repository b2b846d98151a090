//! Monitoring-unit vitals and running line statistics.

/// Health of the monitoring unit itself.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemVitals {
    pub cpu_percent: f64,
    pub memory_percent: f64,
    pub temperature_c: f64,
    pub uptime_minutes: u64,
}

impl SystemVitals {
    /// Formats uptime as `15h 42m`.
    pub fn uptime_label(&self) -> String {
        format!("{}h {}m", self.uptime_minutes / 60, self.uptime_minutes % 60)
    }
}

impl Default for SystemVitals {
    fn default() -> Self {
        Self {
            cpu_percent: 23.0,
            memory_percent: 67.0,
            temperature_c: 42.0,
            uptime_minutes: 15 * 60 + 42,
        }
    }
}

/// Running statistics shown next to the live readings.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MetricStats {
    pub voltage_min: f64,
    pub voltage_max: f64,
    pub voltage_avg: f64,
    /// Percent, kept in `[95, 100]`.
    pub voltage_stability: f64,
    pub current_peak: f64,
    pub current_low: f64,
    pub current_avg: f64,
    /// Line frequency in hertz.
    pub frequency_hz: f64,
}

impl Default for MetricStats {
    fn default() -> Self {
        Self {
            voltage_min: 227.2,
            voltage_max: 232.1,
            voltage_avg: 229.7,
            voltage_stability: 98.5,
            current_peak: 18.7,
            current_low: 12.1,
            current_avg: 15.0,
            frequency_hz: 50.0,
        }
    }
}
