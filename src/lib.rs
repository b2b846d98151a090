// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # intellifence
//!
//! A terminal dashboard for simulated power-line fence telemetry.
//!
//! The simulation engine lives in [`intellifence_sim`]; this crate is its
//! presentation sink. It renders dashboard snapshots from any
//! [`DataSource`]: a live [`SimulationSource`] the user can start, stop and
//! steer, or a [`FileSource`] replaying an exported snapshot.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(derived) │    │(render) │    │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── SimulationSource | FileSource              │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, simulation controls
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait)
//! - **[`data`]**: Trends, sparklines and formatting derived from snapshots
//! - **[`ui`]**: Terminal rendering using ratatui
//! - **[`settings`]**: Layered simulation settings via the `config` crate
//! - **[`export`]**: Snapshot export for replay
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Live dashboard, timer running from the start
//! intellifence --autostart
//!
//! # Ten ticks as JSON lines, reproducible
//! intellifence --headless --ticks 10 --seed 42
//!
//! # Capture a snapshot and replay it later
//! intellifence --export snapshot.json --ticks 50
//! intellifence --replay snapshot.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use intellifence::{App, SimulationSource};
//! use intellifence_sim::Simulation;
//!
//! let sim = Simulation::builder().seed(7).build().unwrap();
//! let source = Box::new(SimulationSource::new(sim.clone()));
//! let app = App::with_theme(source, intellifence::ui::Theme::dark());
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod export;
pub mod settings;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use data::DashboardData;
pub use source::{DataSource, FileSource, SimulationSource};
