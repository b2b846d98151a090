//! Error types for the simulation engine.

use thiserror::Error;

/// Reasons a [`SimConfig`](crate::SimConfig) is rejected.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A range whose lower bound is above its upper bound.
    #[error("invalid range for {field}: min {min} > max {max}")]
    InvertedRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    /// Walk limits that would let samples leave their valid range.
    #[error("{field} range [{min}, {max}] is outside [{floor}, {ceiling}]")]
    OutsideSampleRange {
        field: &'static str,
        min: f64,
        max: f64,
        floor: f64,
        ceiling: f64,
    },

    /// A walk bound that is NaN, or an infinite lower bound.
    #[error("{field} has a non-finite bound")]
    NonFiniteBound { field: &'static str },

    /// A walk span that is negative or not finite.
    #[error("invalid span for {field}: {value}")]
    InvalidSpan { field: &'static str, value: f64 },

    /// A probability outside `[0, 1]`, or odds that are not cumulative.
    #[error("invalid probability for {field}: {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    /// A buffer that could never hold anything.
    #[error("{field} must be at least 1")]
    ZeroCapacity { field: &'static str },

    /// The tick timer would spin.
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}
