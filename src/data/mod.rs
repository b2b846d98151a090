//! Display models built from dashboard snapshots.
//!
//! ## Submodules
//!
//! - [`dashboard`]: [`DashboardData`], a snapshot plus everything derived from it for drawing
//! - [`format`]: relative timestamps, trend arrows and unit formatting
//! - [`trend`]: sparkline series for the line metrics
//!
//! ## Data Flow
//!
//! ```text
//! DashboardSnapshot (from a DataSource)
//!        │
//!        ▼
//! DashboardData::from_snapshot()
//!        │
//!        ├──▶ Trend (latest vs previous sample)
//!        │
//!        └──▶ Sparklines (from the sample history)
//! ```

pub mod dashboard;
pub mod format;
pub mod trend;

pub use dashboard::DashboardData;
pub use trend::Sparklines;
