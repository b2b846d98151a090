//! System view rendering: monitoring unit vitals and simulation state.

use intellifence_sim::Thresholds;
use intellifence_types::Severity;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the System view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        super::render_waiting(frame, app, area);
        return;
    };
    let snapshot = &data.snapshot;
    let vitals = &snapshot.vitals;
    let t = Thresholds::default();

    let [vitals_area, info_area] =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).areas(area);

    let block = Block::default()
        .title(format!(
            " Unit Health: {} ",
            snapshot.vitals_severity.health_label()
        ))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(app.theme.status_style(snapshot.vitals_severity));
    let inner = block.inner(vitals_area);
    frame.render_widget(block, vitals_area);

    let [cpu_area, memory_area, temperature_area, _] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Min(0),
    ])
    .areas(inner);

    render_gauge(
        frame,
        app,
        cpu_area,
        "CPU",
        vitals.cpu_percent,
        format!("{:.0}%", vitals.cpu_percent),
        level(vitals.cpu_percent, t.cpu_warning, t.cpu_critical),
    );
    render_gauge(
        frame,
        app,
        memory_area,
        "Memory",
        vitals.memory_percent,
        format!("{:.0}%", vitals.memory_percent),
        level(vitals.memory_percent, t.memory_warning, t.memory_critical),
    );
    render_gauge(
        frame,
        app,
        temperature_area,
        "Temperature",
        vitals.temperature_c,
        format!("{:.0}°C", vitals.temperature_c),
        level(vitals.temperature_c, t.temperature_warning, t.temperature_critical),
    );

    let label = |text: &'static str| Span::styled(text, Style::default().add_modifier(Modifier::DIM));
    let info = vec![
        Line::from(vec![label("State     "), Span::raw(snapshot.lifecycle.label())]),
        Line::from(vec![label("Uptime    "), Span::raw(vitals.uptime_label())]),
        Line::from(vec![label("Tick      "), Span::raw(snapshot.tick.to_string())]),
        Line::from(vec![
            label("Fence     "),
            Span::raw(format!("{} ({} nodes)", snapshot.fence.id, snapshot.fence.device_count)),
        ]),
        Line::from(vec![label("Location  "), Span::raw(snapshot.fence.location.clone())]),
        Line::from(vec![
            label("Samples   "),
            Span::raw(snapshot.history.len().to_string()),
        ]),
        Line::from(vec![label("Source    "), Span::raw(app.source_description())]),
    ];

    let info_block = Block::default()
        .title(" Simulation ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    frame.render_widget(Paragraph::new(info).block(info_block), info_area);
}

/// Display level for one vital, using the default classifier thresholds.
fn level(value: f64, warning: f64, critical: f64) -> Severity {
    if value > critical {
        Severity::Critical
    } else if value > warning {
        Severity::Warning
    } else {
        Severity::Normal
    }
}

fn render_gauge(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    title: &str,
    percent: f64,
    label: String,
    severity: Severity,
) {
    let gauge = Gauge::default()
        .block(Block::default().title(format!(" {}", title)))
        .gauge_style(Style::default().fg(app.theme.severity_color(severity)))
        .ratio((percent / 100.0).clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}
