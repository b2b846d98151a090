//! Bounded random-walk telemetry.

use intellifence_types::{now_ms, TelemetrySample};

use crate::config::Limits;
use crate::entropy::Entropy;

/// Produces the next line reading from the previous one.
///
/// Each field moves by a uniform delta and is clamped back into its range,
/// so a walk that starts inside the limits never leaves them.
#[derive(Debug, Clone, Default)]
pub struct TelemetryGenerator {
    limits: Limits,
}

impl TelemetryGenerator {
    pub fn new(limits: Limits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Next sample, stamped with the current time.
    pub fn tick(&self, previous: &TelemetrySample, entropy: &mut dyn Entropy) -> TelemetrySample {
        self.tick_at(previous, entropy, now_ms())
    }

    /// Next sample, stamped with `timestamp_ms`.
    ///
    /// Draws current, then voltage, then power from `entropy`.
    pub fn tick_at(
        &self,
        previous: &TelemetrySample,
        entropy: &mut dyn Entropy,
        timestamp_ms: u64,
    ) -> TelemetrySample {
        let current = self.limits.current.step(previous.current, entropy.next_unit());
        let voltage = self.limits.voltage.step(previous.voltage, entropy.next_unit());
        let power = self.limits.power.step(previous.power, entropy.next_unit());
        TelemetrySample::new(voltage, current, power, timestamp_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entropy::{FixedEntropy, ScriptedEntropy, SeededEntropy};
    use intellifence_types::{CURRENT_MAX, CURRENT_MIN, VOLTAGE_MAX, VOLTAGE_MIN};
    use proptest::prelude::*;

    #[test]
    fn zero_delta_returns_same_sample() {
        let generator = TelemetryGenerator::default();
        let previous = TelemetrySample::new(230.5, 15.2, 3.5, 1_000);
        let mut entropy = FixedEntropy::NEUTRAL;
        let next = generator.tick_at(&previous, &mut entropy, previous.timestamp_ms);
        assert_eq!(next, previous);
    }

    #[test]
    fn tick_stamps_current_time() {
        let generator = TelemetryGenerator::default();
        let before = now_ms();
        let mut entropy = FixedEntropy::NEUTRAL;
        let next = generator.tick(&TelemetrySample::baseline(), &mut entropy);
        assert!(next.timestamp_ms >= before);
    }

    #[test]
    fn deltas_are_bounded_by_half_span() {
        let generator = TelemetryGenerator::default();
        let previous = TelemetrySample::baseline();
        // Draw order is current, voltage, power.
        let mut entropy = ScriptedEntropy::new(vec![0.0, 0.0, 0.0]);
        let low = generator.tick_at(&previous, &mut entropy, 0);
        assert!((low.current - (15.2 - 1.0)).abs() < 1e-9);
        assert!((low.voltage - (230.5 - 2.5)).abs() < 1e-9);
        assert!((low.power - (3.5 - 0.25)).abs() < 1e-9);
    }

    #[test]
    fn clamps_at_the_ceiling() {
        let generator = TelemetryGenerator::default();
        let previous = TelemetrySample::new(249.9, 24.9, 0.1, 0);
        let next = generator.tick_at(&previous, &mut FixedEntropy(0.999), 0);
        assert_eq!(next.voltage, VOLTAGE_MAX);
        assert_eq!(next.current, CURRENT_MAX);
    }

    #[test]
    fn power_never_goes_negative() {
        let generator = TelemetryGenerator::default();
        let previous = TelemetrySample::new(230.0, 15.0, 0.05, 0);
        let next = generator.tick_at(&previous, &mut FixedEntropy(0.0), 0);
        assert_eq!(next.power, 0.0);
    }

    #[test]
    fn same_seed_same_walk() {
        let generator = TelemetryGenerator::default();
        let mut a = SeededEntropy::from_seed(403);
        let mut b = SeededEntropy::from_seed(403);
        let mut left = TelemetrySample::baseline();
        let mut right = TelemetrySample::baseline();
        for i in 0..50 {
            left = generator.tick_at(&left, &mut a, i);
            right = generator.tick_at(&right, &mut b, i);
        }
        assert_eq!(left, right);
    }

    proptest! {
        #[test]
        fn every_tick_stays_in_range(seed in any::<u64>(), ticks in 1usize..200) {
            let generator = TelemetryGenerator::default();
            let mut entropy = SeededEntropy::from_seed(seed);
            let mut sample = TelemetrySample::baseline();
            for i in 0..ticks {
                sample = generator.tick_at(&sample, &mut entropy, i as u64);
                prop_assert!(sample.voltage >= VOLTAGE_MIN && sample.voltage <= VOLTAGE_MAX);
                prop_assert!(sample.current >= CURRENT_MIN && sample.current <= CURRENT_MAX);
                prop_assert!(sample.power >= 0.0);
            }
        }

        #[test]
        fn out_of_range_input_is_pulled_back(voltage in 0.0f64..500.0, current in 0.0f64..50.0) {
            let generator = TelemetryGenerator::default();
            let previous = TelemetrySample::new(voltage, current, 1.0, 0);
            let mut entropy = FixedEntropy::NEUTRAL;
            let next = generator.tick_at(&previous, &mut entropy, 0);
            prop_assert!(next.is_within_limits());
        }
    }
}
