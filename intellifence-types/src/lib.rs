//! # intellifence-types
//!
//! Core types for simulated power-line telemetry. These are the values the
//! simulation engine produces and the presentation layer renders: samples,
//! alerts, fence profiles, system vitals and the dashboard snapshot that
//! bundles them.
//!
//! ## Features
//!
//! - `serde`: JSON (and other formats) via serde, used for export and replay
//!
//! ## Example
//!
//! ```rust
//! use intellifence_types::{Alert, Severity, TelemetrySample};
//!
//! let sample = TelemetrySample::baseline();
//! assert!(sample.is_within_limits());
//!
//! let alert = Alert::new("Grid anomaly detected", Severity::Warning, 0);
//! assert!(alert.severity > Severity::Normal);
//! ```

mod alert;
mod profile;
mod sample;
mod snapshot;
mod vitals;

pub use alert::*;
pub use profile::*;
pub use sample::*;
pub use snapshot::*;
pub use vitals::*;

/// Milliseconds since the Unix epoch, as used for every timestamp in this crate.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
