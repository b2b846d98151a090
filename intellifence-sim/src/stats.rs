//! Running line statistics and unit vitals.

use intellifence_types::{MetricStats, SystemVitals, TelemetrySample};

use crate::config::Walk;
use crate::entropy::Entropy;

/// Odds that the current peak/low are refreshed on a tick.
const CURRENT_EXTREMES_ODDS: f64 = 0.3;
/// Odds that the voltage min/max are refreshed on a tick.
const VOLTAGE_EXTREMES_ODDS: f64 = 0.2;
/// Odds that a new line frequency is read on a tick.
const FREQUENCY_ODDS: f64 = 0.1;

const CURRENT_AVG_WEIGHT: f64 = 0.1;
const VOLTAGE_AVG_WEIGHT: f64 = 0.05;

const STABILITY: Walk = Walk::bounded(95.0, 100.0, 0.5);
const NOMINAL_FREQUENCY_HZ: f64 = 50.0;
const FREQUENCY_SPREAD_HZ: f64 = 0.5;

/// Folds samples into [`MetricStats`].
///
/// Extremes are only refreshed on some ticks, so the displayed peak can lag
/// the live value the way the original panels did.
#[derive(Debug, Clone, Default)]
pub struct StatsTracker {
    stats: MetricStats,
}

impl StatsTracker {
    pub fn new(stats: MetricStats) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &MetricStats {
        &self.stats
    }

    pub fn reset(&mut self) {
        self.stats = MetricStats::default();
    }

    /// Update the statistics with a new sample.
    pub fn fold(&mut self, sample: &TelemetrySample, entropy: &mut dyn Entropy) {
        let s = &mut self.stats;

        if entropy.next_unit() < CURRENT_EXTREMES_ODDS {
            s.current_peak = s.current_peak.max(sample.current);
            s.current_low = s.current_low.min(sample.current);
        }
        s.current_avg = s.current_avg * (1.0 - CURRENT_AVG_WEIGHT) + sample.current * CURRENT_AVG_WEIGHT;
        if entropy.next_unit() < FREQUENCY_ODDS {
            s.frequency_hz = NOMINAL_FREQUENCY_HZ + (entropy.next_unit() - 0.5) * FREQUENCY_SPREAD_HZ;
        }

        if entropy.next_unit() < VOLTAGE_EXTREMES_ODDS {
            s.voltage_max = s.voltage_max.max(sample.voltage);
            s.voltage_min = s.voltage_min.min(sample.voltage);
        }
        s.voltage_avg = s.voltage_avg * (1.0 - VOLTAGE_AVG_WEIGHT) + sample.voltage * VOLTAGE_AVG_WEIGHT;
        s.voltage_stability = STABILITY.step(s.voltage_stability, entropy.next_unit());
    }
}

/// Random walk of the monitoring unit's own vitals.
#[derive(Debug, Clone)]
pub struct VitalsGenerator {
    cpu: Walk,
    memory: Walk,
    temperature: Walk,
    /// Uptime advances by `0..max_uptime_step` minutes per tick.
    max_uptime_step: u64,
}

impl Default for VitalsGenerator {
    fn default() -> Self {
        Self {
            cpu: Walk::bounded(5.0, 95.0, 10.0),
            memory: Walk::bounded(20.0, 90.0, 5.0),
            temperature: Walk::bounded(25.0, 70.0, 3.0),
            max_uptime_step: 3,
        }
    }
}

impl VitalsGenerator {
    pub fn tick(&self, previous: &SystemVitals, entropy: &mut dyn Entropy) -> SystemVitals {
        let uptime_step = entropy.next_index(self.max_uptime_step as usize) as u64;
        SystemVitals {
            uptime_minutes: previous.uptime_minutes + uptime_step,
            cpu_percent: self.cpu.step(previous.cpu_percent, entropy.next_unit()),
            memory_percent: self.memory.step(previous.memory_percent, entropy.next_unit()),
            temperature_c: self.temperature.step(previous.temperature_c, entropy.next_unit()),
        }
    }
}
