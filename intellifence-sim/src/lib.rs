//! # intellifence-sim
//!
//! Telemetry and alert simulation engine for the IntelliFence dashboard.
//!
//! A [`Simulation`] owns all mutable state: the current reading, the
//! bounded alert and sample histories, running statistics and the monitoring
//! unit's vitals. Each tick it:
//!
//! 1. Walks the previous reading by a bounded random delta
//! 2. Classifies it against the configured [`Thresholds`]
//! 3. Rolls for a random grid event
//! 4. Notifies subscribers
//!
//! Ticks run either on a tokio interval ([`Simulation::start`]) or by hand
//! ([`Simulation::step`]).
//!
//! ## Example
//!
//! ```rust
//! use intellifence_sim::Simulation;
//!
//! let sim = Simulation::builder().seed(7).build().unwrap();
//! sim.on_alert(|alert| println!("[{}] {}", alert.severity.symbol(), alert.message));
//!
//! for _ in 0..10 {
//!     sim.step();
//! }
//! assert!(sim.alerts().len() <= 5);
//! ```
//!
//! ## Features
//!
//! - `tokio` (default): background tick timer via `start`/`stop`

mod classifier;
mod config;
mod entropy;
mod error;
mod events;
mod generator;
mod history;
mod observer;
mod simulation;
mod stats;

pub use classifier::AlertClassifier;
pub use config::{Band, EventOdds, Limits, SimConfig, Thresholds, Walk};
pub use entropy::{Entropy, FixedEntropy, ScriptedEntropy, SeededEntropy};
pub use error::ConfigError;
pub use events::{EventRoller, CRITICAL_EVENT, NOTICES, TEST_ALERT, WARNING_EVENT};
pub use generator::TelemetryGenerator;
pub use history::{AlertHistory, SampleHistory, DEFAULT_ALERT_CAPACITY, DEFAULT_HISTORY_CAPACITY};
pub use observer::{AlertCallback, SampleCallback, SubscriptionId};
pub use simulation::{Simulation, SimulationBuilder, TickOutcome};
pub use stats::{StatsTracker, VitalsGenerator};

// Re-export the shared types so callers need only one dependency.
pub use intellifence_types as types;
