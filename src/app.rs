//! Application state and navigation logic.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::Result;
use intellifence_sim::Simulation;
use intellifence_types::{FenceProfile, Lifecycle};

use crate::data::DashboardData;
use crate::source::DataSource;
use crate::ui::Theme;

/// Where the `e` key writes snapshots unless told otherwise.
pub const DEFAULT_EXPORT_PATH: &str = "intellifence_snapshot.json";

/// How long a status message stays in the status bar.
const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Live readings, trends and running statistics.
    Dashboard,
    /// Recent alerts, most recent first.
    Alerts,
    /// Fence catalog; pick which site to monitor.
    Fences,
    /// Monitoring unit vitals and simulation state.
    System,
}

impl View {
    pub const ALL: [View; 4] = [View::Dashboard, View::Alerts, View::Fences, View::System];

    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Dashboard => View::Alerts,
            View::Alerts => View::Fences,
            View::Fences => View::System,
            View::System => View::Dashboard,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Dashboard => View::System,
            View::Alerts => View::Dashboard,
            View::Fences => View::Alerts,
            View::System => View::Fences,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Dashboard",
            View::Alerts => "Alerts",
            View::Fences => "Fences",
            View::System => "System",
        }
    }

    /// Position in the tab bar.
    pub fn index(&self) -> usize {
        match self {
            View::Dashboard => 0,
            View::Alerts => 1,
            View::Fences => 2,
            View::System => 3,
        }
    }
}

/// Main application state.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub data: Option<DashboardData>,
    pub load_error: Option<String>,

    // Navigation state
    pub fences: Vec<FenceProfile>,
    pub selected_alert_index: usize,
    pub selected_fence_index: usize,

    pub export_path: PathBuf,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App, picking a theme from the terminal background.
    pub fn new(source: Box<dyn DataSource>) -> Self {
        Self::with_theme(source, Theme::auto_detect())
    }

    pub fn with_theme(source: Box<dyn DataSource>, theme: Theme) -> Self {
        Self {
            running: true,
            current_view: View::Dashboard,
            show_help: false,
            source,
            data: None,
            load_error: None,
            fences: FenceProfile::catalog(),
            selected_alert_index: 0,
            selected_fence_index: 0,
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// True when the source is a simulation the user can control.
    pub fn is_live(&self) -> bool {
        self.source.simulation().is_some()
    }

    /// Lifecycle of the current frame, `Stopped` before the first one.
    pub fn lifecycle(&self) -> Lifecycle {
        self.data
            .as_ref()
            .map(|d| d.snapshot.lifecycle)
            .unwrap_or_default()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired.
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < STATUS_MESSAGE_TTL {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source for new data.
    ///
    /// Returns Ok(true) if new data was received, Ok(false) if no new data,
    /// or Err if there was an error. The source is polled every time, so a
    /// failed read is retried and the error clears once a frame arrives.
    pub fn reload_data(&mut self) -> Result<bool> {
        if let Some(snapshot) = self.source.poll() {
            let data = DashboardData::from_snapshot(snapshot);

            // Keep the fence cursor on the active fence until the user moves it
            if self.current_view != View::Fences {
                if let Some(idx) = self.fences.iter().position(|f| f.id == data.snapshot.fence.id) {
                    self.selected_fence_index = idx;
                }
            }

            let alert_count = data.snapshot.alerts.len();
            if self.selected_alert_index >= alert_count {
                self.selected_alert_index = alert_count.saturating_sub(1);
            }

            self.data = Some(data);
            self.load_error = None;
            Ok(true)
        } else {
            if let Some(err) = self.source.error() {
                self.load_error = Some(err.to_string());
            }
            Ok(false)
        }
    }

    /// Switch to the next view (cycles Dashboard → Alerts → Fences → System).
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Number of selectable rows in the current view.
    fn list_len(&self) -> usize {
        match self.current_view {
            View::Alerts => self.data.as_ref().map_or(0, |d| d.snapshot.alerts.len()),
            View::Fences => self.fences.len(),
            View::Dashboard | View::System => 0,
        }
    }

    fn selection_mut(&mut self) -> Option<&mut usize> {
        match self.current_view {
            View::Alerts => Some(&mut self.selected_alert_index),
            View::Fences => Some(&mut self.selected_fence_index),
            View::Dashboard | View::System => None,
        }
    }

    /// Move selection down by one item.
    pub fn select_next(&mut self) {
        let max = self.list_len().saturating_sub(1);
        if let Some(idx) = self.selection_mut() {
            *idx = (*idx + 1).min(max);
        }
    }

    /// Move selection up by one item.
    pub fn select_prev(&mut self) {
        if let Some(idx) = self.selection_mut() {
            *idx = idx.saturating_sub(1);
        }
    }

    /// Jump to the first item in the list.
    pub fn select_first(&mut self) {
        if let Some(idx) = self.selection_mut() {
            *idx = 0;
        }
    }

    /// Jump to the last item in the list.
    pub fn select_last(&mut self) {
        let last = self.list_len().saturating_sub(1);
        if let Some(idx) = self.selection_mut() {
            *idx = last;
        }
    }

    /// The controllable simulation, or a status message explaining why not.
    fn live_simulation(&mut self) -> Option<Simulation> {
        let simulation = self.source.simulation().cloned();
        if simulation.is_none() {
            self.set_status_message("Replay is read-only".to_string());
        }
        simulation
    }

    /// Start the simulation if stopped, stop it if running.
    ///
    /// Starting needs a tokio runtime context for the tick task.
    pub fn toggle_simulation(&mut self) {
        let Some(sim) = self.live_simulation() else {
            return;
        };
        let message = match sim.toggle() {
            Lifecycle::Running => format!(
                "Simulation started, ticking every {} ms",
                sim.config().tick_interval_ms
            ),
            Lifecycle::Stopped => "Simulation stopped".to_string(),
        };
        self.set_status_message(message);
        self.source.invalidate();
    }

    /// Advance the simulation by exactly one tick.
    pub fn step_once(&mut self) {
        let Some(sim) = self.live_simulation() else {
            return;
        };
        sim.step();
        self.set_status_message(format!("Stepped to tick {}", sim.tick_count()));
    }

    /// Raise the manual test alert.
    pub fn trigger_test_alert(&mut self) {
        let Some(sim) = self.live_simulation() else {
            return;
        };
        sim.trigger_test_alert();
        self.set_status_message("Test alert triggered".to_string());
    }

    /// Switch monitoring to the fence under the cursor in the Fences view.
    pub fn choose_selected_fence(&mut self) {
        let Some(fence) = self.fences.get(self.selected_fence_index).cloned() else {
            return;
        };
        let Some(sim) = self.live_simulation() else {
            return;
        };
        let message = format!("Monitoring {} {}", fence.id, fence.name);
        sim.select_fence(fence);
        self.set_status_message(message);
        self.source.invalidate();
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current frame's snapshot to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };
        crate::export::write_snapshot(path, &data.snapshot)
    }
}
