//! Sparkline series for the line metrics.

use intellifence_types::TelemetrySample;

/// Sparkline characters (8 levels of height).
pub const SPARKLINE_CHARS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Normalized sparkline levels (0-7) for each line metric, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sparklines {
    pub voltage: Vec<u8>,
    pub current: Vec<u8>,
    pub power: Vec<u8>,
}

impl Sparklines {
    /// Build sparklines from a sample history.
    ///
    /// Returns empty series if there's not enough history.
    pub fn from_samples(samples: &[TelemetrySample]) -> Self {
        Self {
            voltage: normalize(samples.iter().map(|s| s.voltage)),
            current: normalize(samples.iter().map(|s| s.current)),
            power: normalize(samples.iter().map(|s| s.power)),
        }
    }
}

/// Scale values into the 0-7 range relative to their own min and max.
///
/// A flat series renders at mid height.
fn normalize(values: impl Iterator<Item = f64>) -> Vec<u8> {
    let values: Vec<f64> = values.collect();
    if values.len() < 2 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range <= f64::EPSILON {
        return vec![3; values.len()];
    }

    values
        .iter()
        .map(|v| {
            let normalized = ((v - min) / range * 7.0).round() as u8;
            normalized.min(7)
        })
        .collect()
}

/// Render sparkline levels as a string.
pub fn render_sparkline(levels: &[u8]) -> String {
    levels
        .iter()
        .map(|&level| SPARKLINE_CHARS[(level as usize).min(7)])
        .collect()
}

/// The most recent `width` levels, for narrow panels.
pub fn tail(levels: &[u8], width: usize) -> &[u8] {
    &levels[levels.len().saturating_sub(width)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(voltages: &[f64]) -> Vec<TelemetrySample> {
        voltages
            .iter()
            .map(|&v| TelemetrySample::new(v, 15.0, 3.0, 0))
            .collect()
    }

    #[test]
    fn test_too_little_history() {
        let sparklines = Sparklines::from_samples(&samples(&[230.0]));
        assert!(sparklines.voltage.is_empty());
    }

    #[test]
    fn test_scales_to_range() {
        let sparklines = Sparklines::from_samples(&samples(&[220.0, 230.0, 240.0]));
        assert_eq!(sparklines.voltage, vec![0, 4, 7]);
    }

    #[test]
    fn test_flat_series_is_mid_height() {
        let sparklines = Sparklines::from_samples(&samples(&[230.0, 230.0, 230.0]));
        assert_eq!(sparklines.current, vec![3, 3, 3]);
    }

    #[test]
    fn test_render_sparkline() {
        assert_eq!(render_sparkline(&[0, 3, 7]), "▁▄█");
        assert_eq!(render_sparkline(&[]), "");
    }

    #[test]
    fn test_tail() {
        assert_eq!(tail(&[1, 2, 3, 4], 2), &[3, 4]);
        assert_eq!(tail(&[1, 2], 5), &[1, 2]);
    }
}
