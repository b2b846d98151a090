//! Fences view rendering.
//!
//! The fence catalog. The active fence is marked; Enter switches to the one
//! under the cursor.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::format::format_reading;

/// Render the Fences view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let active_id = app.data.as_ref().map(|d| d.snapshot.fence.id.as_str());

    let header = Row::new(vec!["", "ID", "Name", "Location", "Nodes", "Baseline"])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = app
        .fences
        .iter()
        .map(|fence| {
            let active = active_id == Some(fence.id.as_str());
            let marker = if active { "●" } else { "" };
            let style = if active {
                Style::default().fg(app.theme.healthy).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(marker),
                Cell::from(fence.id.clone()),
                Cell::from(fence.name.clone()),
                Cell::from(fence.location.clone()),
                Cell::from(fence.device_count.to_string()),
                Cell::from(format!(
                    "{} / {}",
                    format_reading(fence.baseline.voltage, "V"),
                    format_reading(fence.baseline.current, "A")
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Length(7),
        Constraint::Fill(2),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(18),
    ];

    let title = if app.is_live() {
        " Fences [Enter:monitor] "
    } else {
        " Fences (replay) "
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border)),
        )
        .row_highlight_style(app.theme.selected)
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_fence_index));

    frame.render_stateful_widget(table, area, &mut state);
}
