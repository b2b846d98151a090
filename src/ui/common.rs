//! Chrome around the active view: header, tabs, status line and help.

use intellifence_types::Severity;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use crate::app::{App, View};
use crate::data::format::format_elapsed;

/// One-line summary: worst severity dot, fence, lifecycle, tick and alert counts.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        let line = Line::from(vec![
            Span::styled(" INTELLIFENCE ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("| Loading..."),
        ]);
        frame.render_widget(Paragraph::new(line), area);
        return;
    };

    let snapshot = &data.snapshot;
    let (_, warning, critical) = snapshot.alert_counts();
    let status_style = app.theme.status_style(data.overall_severity());

    let lifecycle_style = if snapshot.lifecycle.is_running() {
        Style::default().fg(app.theme.healthy).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };

    let line = Line::from(vec![
        Span::styled(" ● ", status_style),
        Span::styled("INTELLIFENCE ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ "),
        Span::styled(
            snapshot.fence.id.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} │ ", snapshot.fence.name)),
        Span::styled(snapshot.lifecycle.label(), lifecycle_style),
        Span::raw(format!(" │ tick {} │ ", snapshot.tick)),
        count_span(warning, app.theme.status_style(Severity::Warning)),
        Span::raw(" warn "),
        count_span(critical, app.theme.status_style(Severity::Critical)),
        Span::raw(" crit"),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Count in its severity style, or dimmed when zero.
fn count_span(count: usize, style: Style) -> Span<'static> {
    if count > 0 {
        Span::styled(count.to_string(), style)
    } else {
        Span::styled("0", Style::default().add_modifier(Modifier::DIM))
    }
}

pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| Line::from(format!(" {}:{} ", i + 1, view.label())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.current_view.index())
        .style(app.theme.tab_inactive)
        .highlight_style(app.theme.tab_active)
        .divider("|");

    frame.render_widget(tabs, area);
}

/// A pending action message wins over the regular status line.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let (text, style) = match app.get_status_message() {
        Some(msg) => (
            format!(" {} ", msg),
            Style::default().fg(app.theme.highlight),
        ),
        None => (
            status_line(app),
            Style::default().add_modifier(Modifier::DIM),
        ),
    };
    frame.render_widget(Paragraph::new(text).style(style), area);
}

fn status_line(app: &App) -> String {
    if let Some(ref data) = app.data {
        let controls = match (app.is_live(), app.current_view) {
            (false, _) => "Tab:switch ?:help q:quit",
            (true, View::Fences) => "↑↓:select Enter:monitor Space:start/stop ?:help q:quit",
            (true, View::Alerts) => "↑↓:select t:test alert Space:start/stop ?:help q:quit",
            (true, _) => "Space:start/stop n:step t:test e:export Tab:switch ?:help q:quit",
        };

        format!(
            " {} | {} | Updated {} ago | {}",
            app.current_view.label(),
            app.source_description(),
            format_elapsed(data.last_updated.elapsed()),
            controls,
        )
    } else if let Some(ref err) = app.load_error {
        format!(" Error: {} | q:quit r:retry", err)
    } else {
        " Loading... | q:quit".to_string()
    }
}

/// Centered key reference drawn over whatever view is active.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let section = |title: &'static str| {
        Line::from(vec![Span::styled(
            title,
            Style::default().add_modifier(Modifier::BOLD),
        )])
    };

    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.header)]),
        Line::from(""),
        section(" Navigation"),
        Line::from("  Tab ←/→     Switch views"),
        Line::from("  1-4         Jump to view"),
        Line::from("  ↑/↓ j/k     Navigate list"),
        Line::from("  Home/End    Jump to first/last"),
        Line::from(""),
        section(" Simulation"),
        Line::from("  Space       Start / stop"),
        Line::from("  n           Single step"),
        Line::from("  t           Trigger test alert"),
        Line::from("  Enter       Monitor selected fence"),
        Line::from(""),
        section(" General"),
        Line::from("  r           Reload data"),
        Line::from("  e           Export snapshot to JSON"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let popup = centered(area, 42, help_text.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(help_text).block(block), popup);
}

/// A `width` x `height` rect centered in `area`, shrunk to leave a margin.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
