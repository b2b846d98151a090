//! Data source abstraction for receiving dashboard snapshots.
//!
//! The TUI does not care whether frames come from a live simulation or from
//! a snapshot file on disk; both implement [`DataSource`].

mod file;
mod simulation;

pub use file::FileSource;
pub use simulation::SimulationSource;

use std::fmt::Debug;

use intellifence_sim::Simulation;
use intellifence_types::DashboardSnapshot;

/// Trait for receiving dashboard snapshots from various sources.
///
/// # Example
///
/// ```
/// use intellifence::{DataSource, FileSource};
///
/// let mut source = FileSource::new("snapshot.json");
/// if let Some(snapshot) = source.poll() {
///     println!("{} alerts", snapshot.alerts.len());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<DashboardSnapshot>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Returns the error message if an error occurred during the last poll.
    fn error(&self) -> Option<&str>;

    /// The simulation behind this source, if it can be controlled.
    ///
    /// Replayed snapshots are read-only and return `None`.
    fn simulation(&self) -> Option<&Simulation> {
        None
    }

    /// Force the next poll to return a snapshot.
    ///
    /// Called after control actions that change state without a tick, such
    /// as selecting a fence or toggling the timer.
    fn invalidate(&mut self) {}
}
