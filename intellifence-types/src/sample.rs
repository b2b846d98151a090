//! Telemetry samples and their valid ranges.

/// Lowest voltage a sample may carry, in volts.
pub const VOLTAGE_MIN: f64 = 200.0;
/// Highest voltage a sample may carry, in volts.
pub const VOLTAGE_MAX: f64 = 250.0;
/// Lowest line current a sample may carry, in amperes.
pub const CURRENT_MIN: f64 = 5.0;
/// Highest line current a sample may carry, in amperes.
pub const CURRENT_MAX: f64 = 25.0;

/// One reading of a monitored power line.
///
/// Samples are plain values: the generator produces a fresh one every tick
/// and never mutates an existing one.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetrySample {
    /// Line voltage in volts.
    pub voltage: f64,
    /// Line current in amperes.
    pub current: f64,
    /// Delivered power in kilowatts.
    pub power: f64,
    /// When the sample was taken (Unix milliseconds).
    pub timestamp_ms: u64,
}

impl TelemetrySample {
    /// Create a sample with the given readings.
    pub const fn new(voltage: f64, current: f64, power: f64, timestamp_ms: u64) -> Self {
        Self {
            voltage,
            current,
            power,
            timestamp_ms,
        }
    }

    /// The reading every demo fence starts from unless its profile says otherwise.
    pub const fn baseline() -> Self {
        Self::new(230.5, 15.2, 3.5, 0)
    }

    /// Copy of this sample with a different timestamp.
    pub fn at(self, timestamp_ms: u64) -> Self {
        Self {
            timestamp_ms,
            ..self
        }
    }

    /// True if every field is inside its valid range.
    pub fn is_within_limits(&self) -> bool {
        (VOLTAGE_MIN..=VOLTAGE_MAX).contains(&self.voltage)
            && (CURRENT_MIN..=CURRENT_MAX).contains(&self.current)
            && self.power >= 0.0
    }

    /// Change from `previous` to `self`, per field.
    pub fn delta_from(&self, previous: &TelemetrySample) -> Trend {
        Trend {
            voltage: Change::between(previous.voltage, self.voltage),
            current: Change::between(previous.current, self.current),
            power: Change::between(previous.power, self.power),
        }
    }
}

impl Default for TelemetrySample {
    fn default() -> Self {
        Self::baseline()
    }
}

/// Absolute and relative change of one metric between two samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Change {
    pub absolute: f64,
    /// Percent of the previous value. Zero when the previous value was zero.
    pub percent: f64,
}

impl Change {
    /// Change going from `from` to `to`.
    pub fn between(from: f64, to: f64) -> Self {
        let absolute = to - from;
        let percent = if from == 0.0 { 0.0 } else { absolute / from * 100.0 };
        Self { absolute, percent }
    }

    /// True for a rise or no change.
    pub fn is_rising(&self) -> bool {
        self.absolute >= 0.0
    }
}

/// Per-field change between consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trend {
    pub voltage: Change,
    pub current: Change,
    pub power: Change,
}
