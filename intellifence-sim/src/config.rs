//! Simulation constants.
//!
//! The bands and odds below are the demo values the dashboard has always
//! shipped with. They carry no engineering meaning and are kept configurable
//! rather than baked into the generator or classifier.

use std::time::Duration;

use intellifence_types::{CURRENT_MAX, CURRENT_MIN, VOLTAGE_MAX, VOLTAGE_MIN};
use serde::Deserialize;

use crate::error::ConfigError;

/// Bounds and step size for one random-walk metric.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Walk {
    pub min: f64,
    /// `None` leaves the metric unbounded above.
    #[serde(default)]
    pub max: Option<f64>,
    /// Full width of the uniform delta; each tick moves by up to `span / 2`.
    pub span: f64,
}

impl Walk {
    pub const fn bounded(min: f64, max: f64, span: f64) -> Self {
        Self {
            min,
            max: Some(max),
            span,
        }
    }

    pub const fn floor(min: f64, span: f64) -> Self {
        Self {
            min,
            max: None,
            span,
        }
    }

    /// Clamp `value` into this walk's range.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = value.max(self.min);
        match self.max {
            Some(max) => value.min(max),
            None => value,
        }
    }

    /// Move `value` by a delta drawn from `unit` in `[0, 1)`, then clamp.
    pub fn step(&self, value: f64, unit: f64) -> f64 {
        self.clamp(value + (unit - 0.5) * self.span)
    }

    /// Check the walk is well formed and stays inside `[floor, ceiling]`.
    fn validate(&self, field: &'static str, floor: f64, ceiling: f64) -> Result<(), ConfigError> {
        let max = self.max.unwrap_or(f64::INFINITY);
        if self.min.is_nan() || max.is_nan() || self.min.is_infinite() {
            return Err(ConfigError::NonFiniteBound { field });
        }
        if self.min > max {
            return Err(ConfigError::InvertedRange {
                field,
                min: self.min,
                max,
            });
        }
        if self.min < floor || max > ceiling {
            return Err(ConfigError::OutsideSampleRange {
                field,
                min: self.min,
                max,
                floor,
                ceiling,
            });
        }
        if !self.span.is_finite() || self.span < 0.0 {
            return Err(ConfigError::InvalidSpan {
                field,
                value: self.span,
            });
        }
        Ok(())
    }
}

/// Random-walk parameters for the line readings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Limits {
    pub voltage: Walk,
    pub current: Walk,
    pub power: Walk,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            voltage: Walk::bounded(200.0, 250.0, 5.0),
            current: Walk::bounded(5.0, 25.0, 2.0),
            power: Walk::floor(0.0, 0.5),
        }
    }
}

/// Inclusive band of acceptable values.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Band {
    pub low: f64,
    pub high: f64,
}

impl Band {
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

/// Classification thresholds for line readings and unit vitals.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Voltage inside this band is normal.
    pub voltage_optimal: Band,
    /// Voltage outside this band is critical; between the two bands it is a warning.
    pub voltage_tolerance: Band,
    /// Current above this is a warning.
    pub current_warning: f64,
    /// Current above this (the peak threshold) is critical.
    pub current_critical: f64,
    pub cpu_warning: f64,
    pub cpu_critical: f64,
    pub memory_warning: f64,
    pub memory_critical: f64,
    pub temperature_warning: f64,
    pub temperature_critical: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            voltage_optimal: Band::new(220.0, 240.0),
            voltage_tolerance: Band::new(210.0, 250.0),
            current_warning: 18.7,
            current_critical: 22.0,
            cpu_warning: 80.0,
            cpu_critical: 90.0,
            memory_warning: 85.0,
            memory_critical: 95.0,
            temperature_warning: 60.0,
            temperature_critical: 65.0,
        }
    }
}

/// Cumulative per-tick odds for random events.
///
/// A roll below `critical` raises a critical alert, below `warning` a
/// warning, below `notice` a normal notice; anything else is quiet.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EventOdds {
    pub critical: f64,
    pub warning: f64,
    pub notice: f64,
}

impl Default for EventOdds {
    fn default() -> Self {
        Self {
            critical: 0.10,
            warning: 0.25,
            notice: 0.40,
        }
    }
}

impl EventOdds {
    /// Odds that never fire.
    pub const fn silent() -> Self {
        Self {
            critical: 0.0,
            warning: 0.0,
            notice: 0.0,
        }
    }
}

/// Full simulation configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub limits: Limits,
    pub thresholds: Thresholds,
    pub odds: EventOdds,
    pub tick_interval_ms: u64,
    pub alert_capacity: usize,
    pub history_capacity: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            limits: Limits::default(),
            thresholds: Thresholds::default(),
            odds: EventOdds::default(),
            tick_interval_ms: 2000,
            alert_capacity: 5,
            history_capacity: 20,
        }
    }
}

impl SimConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check every range, probability and capacity.
    ///
    /// Walk limits must sit inside the sample invariants: voltage in
    /// `[200, 250]`, current in `[5, 25]` and power at or above zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let limits = &self.limits;
        limits
            .voltage
            .validate("limits.voltage", VOLTAGE_MIN, VOLTAGE_MAX)?;
        limits
            .current
            .validate("limits.current", CURRENT_MIN, CURRENT_MAX)?;
        limits.power.validate("limits.power", 0.0, f64::INFINITY)?;

        let t = &self.thresholds;
        for (field, band) in [
            ("thresholds.voltage_optimal", t.voltage_optimal),
            ("thresholds.voltage_tolerance", t.voltage_tolerance),
        ] {
            if band.low > band.high {
                return Err(ConfigError::InvertedRange {
                    field,
                    min: band.low,
                    max: band.high,
                });
            }
        }
        if t.current_warning > t.current_critical {
            return Err(ConfigError::InvertedRange {
                field: "thresholds.current",
                min: t.current_warning,
                max: t.current_critical,
            });
        }

        let mut floor = 0.0;
        for (field, value) in [
            ("odds.critical", self.odds.critical),
            ("odds.warning", self.odds.warning),
            ("odds.notice", self.odds.notice),
        ] {
            if !(0.0..=1.0).contains(&value) || value < floor {
                return Err(ConfigError::InvalidProbability { field, value });
            }
            floor = value;
        }

        if self.alert_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "alert_capacity",
            });
        }
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity {
                field: "history_capacity",
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ZeroInterval);
        }
        Ok(())
    }
}
