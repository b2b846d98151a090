//! Terminal UI rendering using ratatui.
//!
//! Each view is implemented in its own submodule with a `render` function.
//!
//! ## Submodules
//!
//! - [`dashboard`]: Live readings with trends, sparklines and running statistics
//! - [`alerts`]: Alert history, most recent first
//! - [`fences`]: Fence catalog and selection
//! - [`system`]: Monitoring unit vitals and simulation state
//! - [`common`]: Shared components (header, tabs, status bar, help overlay)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Tabs (common::render_tabs)           │
//! ├──────────────────────────────────────┤
//! │                                      │
//! │ View Content                         │
//! │ (dashboard/alerts/fences/system)     │
//! │                                      │
//! ├──────────────────────────────────────┤
//! │ Status Bar (common::render_status)   │
//! └──────────────────────────────────────┘
//!         ↑
//!    Overlay rendered on top:
//!    - common::render_help
//! ```

pub mod alerts;
pub mod common;
pub mod dashboard;
pub mod fences;
pub mod system;
pub mod theme;

pub use theme::Theme;

use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;

/// Placeholder shown by views that have no frame yet.
pub(crate) fn render_waiting(frame: &mut Frame, app: &App, area: Rect) {
    let text = match app.load_error {
        Some(ref err) => format!("Waiting for data: {}", err),
        None => "Waiting for data...".to_string(),
    };
    let paragraph = Paragraph::new(Line::from(text))
        .style(Style::default().add_modifier(Modifier::DIM))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::View;
    use crate::source::{FileSource, SimulationSource};
    use intellifence_sim::Simulation;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_all(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut text = String::new();
        for view in View::ALL {
            app.set_view(view);
            terminal
                .draw(|frame| {
                    let area = frame.area();
                    match app.current_view {
                        View::Dashboard => dashboard::render(frame, app, area),
                        View::Alerts => alerts::render(frame, app, area),
                        View::Fences => fences::render(frame, app, area),
                        View::System => system::render(frame, app, area),
                    }
                    if app.show_help {
                        common::render_help(frame, app, area);
                    }
                })
                .unwrap();
            let buffer = terminal.backend().buffer();
            for cell in buffer.content() {
                text.push_str(cell.symbol());
            }
        }
        text
    }

    #[test]
    fn test_every_view_renders_live_data() {
        let sim = Simulation::builder().seed(11).build().unwrap();
        for _ in 0..20 {
            sim.step();
        }
        sim.trigger_test_alert();

        let mut app = App::with_theme(Box::new(SimulationSource::new(sim)), Theme::dark());
        app.reload_data().unwrap();

        let text = render_all(&mut app);
        assert!(text.contains("Voltage"));
        assert!(text.contains("TEST ALERT"));
        assert!(text.contains("FN-001"));
    }

    #[test]
    fn test_views_render_without_data() {
        let mut app = App::with_theme(
            Box::new(FileSource::new("/nonexistent/snapshot.json")),
            Theme::light(),
        );
        let _ = app.reload_data();

        let text = render_all(&mut app);
        assert!(text.contains("Waiting for data"));

        app.toggle_help();
        let text = render_all(&mut app);
        assert!(text.contains("Keyboard Shortcuts"));
    }
}
