//! Alerts view rendering.
//!
//! The bounded alert history as a table, most recent first, with the
//! severity mix above it.

use intellifence_types::Severity;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::app::App;
use crate::data::format::time_ago;

/// Render the Alerts view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        super::render_waiting(frame, app, area);
        return;
    };
    let snapshot = &data.snapshot;

    let [mix_area, table_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Min(4)]).areas(area);

    let (normal, warning, critical) = data.alert_mix();
    let mix = Line::from(vec![
        Span::raw(" Mix: "),
        Span::styled(
            format!("{}% normal", normal),
            app.theme.status_style(Severity::Normal),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{}% warning", warning),
            app.theme.status_style(Severity::Warning),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{}% critical", critical),
            app.theme.status_style(Severity::Critical),
        ),
    ]);
    frame.render_widget(Paragraph::new(mix), mix_area);

    let header = Row::new(vec!["Level", "Message", "When"])
        .height(1)
        .style(app.theme.header);

    let rows: Vec<Row> = snapshot
        .alerts
        .iter()
        .map(|alert| {
            Row::new(vec![
                Cell::from(alert.severity.symbol()).style(app.theme.status_style(alert.severity)),
                Cell::from(alert.message.clone()),
                Cell::from(time_ago(alert.created_at_ms, snapshot.taken_at_ms))
                    .style(Style::default().add_modifier(Modifier::DIM)),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Fill(1),
        Constraint::Length(16),
    ];

    let position_info = if snapshot.alerts.is_empty() {
        String::new()
    } else {
        format!(
            " [{}/{}]",
            app.selected_alert_index + 1,
            snapshot.alerts.len()
        )
    };
    let title = format!(" Alerts{} ", position_info);

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
    if !snapshot.alerts.is_empty() {
        state.select(Some(app.selected_alert_index));
    }

    frame.render_stateful_widget(table, table_area, &mut state);
}
