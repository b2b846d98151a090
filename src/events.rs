use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

use crate::app::{App, View};

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // Windows reports releases too
    if key.kind == KeyEventKind::Release {
        return;
    }

    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),

        // View switching
        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.prev_view();
            } else {
                app.next_view();
            }
        }
        KeyCode::BackTab => app.prev_view(),
        KeyCode::Char('1') => app.set_view(View::Dashboard),
        KeyCode::Char('2') => app.set_view(View::Alerts),
        KeyCode::Char('3') => app.set_view(View::Fences),
        KeyCode::Char('4') => app.set_view(View::System),
        KeyCode::Left | KeyCode::Char('h') => app.prev_view(),
        KeyCode::Right | KeyCode::Char('l') => app.next_view(),
        KeyCode::Esc => app.set_view(View::Dashboard),

        // List navigation
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Simulation control
        KeyCode::Char(' ') => app.toggle_simulation(),
        KeyCode::Char('n') => app.step_once(),
        KeyCode::Char('t') => app.trigger_test_alert(),
        KeyCode::Enter => {
            if app.current_view == View::Fences {
                app.choose_selected_fence();
            }
        }

        KeyCode::Char('r') => {
            let _ = app.reload_data();
        }

        KeyCode::Char('?') => app.toggle_help(),

        KeyCode::Char('e') => {
            let export_path = app.export_path.clone();
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        _ => {}
    }
}

/// Handle mouse events
///
/// `content_start_row` is the first row below the tab bar.
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent, content_start_row: u16) {
    match mouse.kind {
        MouseEventKind::ScrollUp => app.select_prev(),
        MouseEventKind::ScrollDown => app.select_next(),

        MouseEventKind::Down(MouseButton::Left) => {
            let row = mouse.row;

            // Tab bar sits on the row above the content
            if row + 1 == content_start_row {
                if let Some(view) = tab_at_column(mouse.column) {
                    app.set_view(view);
                }
                return;
            }

            // Border and table header, plus the mix line on the Alerts view
            let first_item_row = match app.current_view {
                View::Alerts => content_start_row + 3,
                _ => content_start_row + 2,
            };
            if row < first_item_row {
                return;
            }
            let item = (row - first_item_row) as usize;
            match app.current_view {
                View::Fences if item < app.fences.len() => app.selected_fence_index = item,
                View::Alerts => {
                    let count = app.data.as_ref().map_or(0, |d| d.snapshot.alerts.len());
                    if item < count {
                        app.selected_alert_index = item;
                    }
                }
                _ => {}
            }
        }

        MouseEventKind::Down(MouseButton::Right) => app.set_view(View::Dashboard),

        _ => {}
    }
}

/// Which tab a click on the tab bar landed on.
///
/// Tabs render as " N:Label " plus one column of padding on each side,
/// separated by a one-column divider.
fn tab_at_column(column: u16) -> Option<View> {
    let mut start = 0u16;
    for (i, view) in View::ALL.iter().enumerate() {
        let width = format!(" {}:{} ", i + 1, view.label()).chars().count() as u16 + 2;
        if column < start + width {
            return Some(*view);
        }
        start += width + 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::SimulationSource;
    use crate::ui::Theme;
    use crossterm::event::KeyEventState;
    use intellifence_sim::Simulation;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn app() -> (Simulation, App) {
        let sim = Simulation::builder().seed(2).build().unwrap();
        let mut app = App::with_theme(Box::new(SimulationSource::new(sim.clone())), Theme::dark());
        app.reload_data().unwrap();
        (sim, app)
    }

    #[test]
    fn test_help_swallows_next_key() {
        let (_sim, mut app) = app();
        handle_key_event(&mut app, press(KeyCode::Char('?')));
        assert!(app.show_help);
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.show_help);
        assert!(app.running);
    }

    #[test]
    fn test_view_keys() {
        let (_sim, mut app) = app();
        handle_key_event(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.current_view, View::Fences);
        handle_key_event(&mut app, press(KeyCode::Tab));
        assert_eq!(app.current_view, View::System);
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.current_view, View::Dashboard);
    }

    #[test]
    fn test_step_and_test_alert_keys() {
        let (sim, mut app) = app();
        handle_key_event(&mut app, press(KeyCode::Char('n')));
        assert_eq!(sim.tick_count(), 1);
        handle_key_event(&mut app, press(KeyCode::Char('t')));
        assert!(sim.alerts()[0].message.starts_with("TEST ALERT"));
    }

    #[test]
    fn test_enter_only_selects_fence_in_fences_view() {
        let (sim, mut app) = app();
        app.selected_fence_index = 1;
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(sim.fence().id, "FN-001");

        app.set_view(View::Fences);
        app.selected_fence_index = 1;
        handle_key_event(&mut app, press(KeyCode::Enter));
        assert_eq!(sim.fence().id, "FN-002");
    }

    #[test]
    fn test_export_key_writes_file() {
        let (_sim, mut app) = app();
        let dir = tempfile::tempdir().unwrap();
        app.export_path = dir.path().join("out.json");
        handle_key_event(&mut app, press(KeyCode::Char('e')));
        assert!(app.export_path.exists());
        assert!(app.get_status_message().unwrap().starts_with("Exported to"));
    }

    #[test]
    fn test_quit() {
        let (_sim, mut app) = app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(!app.running);
    }

    #[test]
    fn test_tab_at_column() {
        // " 1:Dashboard " is 13 wide plus padding, then a divider
        assert_eq!(tab_at_column(0), Some(View::Dashboard));
        assert_eq!(tab_at_column(14), Some(View::Dashboard));
        assert_eq!(tab_at_column(16), Some(View::Alerts));
        assert_eq!(tab_at_column(200), None);
    }
}
