//! Dashboard view rendering.
//!
//! Three metric panels (voltage, current, power) with trend and sparkline,
//! running statistics, and the most recent alerts.

use intellifence_types::{Change, Severity};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use crate::app::App;
use crate::data::format::{format_change, format_reading, time_ago};
use crate::data::trend::{render_sparkline, tail};
use crate::data::DashboardData;
use crate::ui::Theme;

/// Alerts shown in the dashboard's recent list.
const RECENT_ALERTS: usize = 3;

/// Render the Dashboard view.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(ref data) = app.data else {
        super::render_waiting(frame, app, area);
        return;
    };

    let [panels, bottom] =
        Layout::vertical([Constraint::Length(6), Constraint::Min(6)]).areas(area);
    let [voltage_area, current_area, power_area] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(panels);
    let [stats_area, alerts_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(bottom);

    let snapshot = &data.snapshot;
    let stats = &snapshot.stats;

    render_metric(
        frame,
        &app.theme,
        voltage_area,
        MetricPanel {
            title: " Voltage ",
            reading: format_reading(snapshot.latest.voltage, "V"),
            change: data.trend.voltage,
            detail: Span::styled(
                format!("Status: {}", snapshot.line_severity.line_status()),
                app.theme.status_style(snapshot.line_severity),
            ),
            sparkline: &data.sparklines.voltage,
            severity: snapshot.line_severity,
        },
    );
    render_metric(
        frame,
        &app.theme,
        current_area,
        MetricPanel {
            title: " Current ",
            reading: format_reading(snapshot.latest.current, "A"),
            change: data.trend.current,
            detail: Span::raw(format!("Peak: {}", format_reading(stats.current_peak, "A"))),
            sparkline: &data.sparklines.current,
            severity: Severity::Normal,
        },
    );
    render_metric(
        frame,
        &app.theme,
        power_area,
        MetricPanel {
            title: " Power ",
            reading: format_reading(snapshot.latest.power, "kW"),
            change: data.trend.power,
            detail: Span::raw(format!("Freq: {:.2} Hz", stats.frequency_hz)),
            sparkline: &data.sparklines.power,
            severity: Severity::Normal,
        },
    );

    render_stats(frame, app, data, stats_area);
    render_recent_alerts(frame, app, data, alerts_area);
}

struct MetricPanel<'a> {
    title: &'static str,
    reading: String,
    change: Change,
    detail: Span<'a>,
    sparkline: &'a [u8],
    /// Border color; only voltage carries its own classification.
    severity: Severity,
}

fn render_metric(frame: &mut Frame, theme: &Theme, area: Rect, panel: MetricPanel) {
    let change_style = if panel.change.absolute == 0.0 {
        Style::default().add_modifier(Modifier::DIM)
    } else if panel.change.is_rising() {
        Style::default().fg(theme.healthy)
    } else {
        Style::default().fg(theme.critical)
    };

    let border_color = if panel.severity == Severity::Normal {
        theme.border
    } else {
        theme.severity_color(panel.severity)
    };

    let width = area.width.saturating_sub(4) as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled(panel.reading, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(format_change(&panel.change), change_style),
        ]),
        Line::from(panel.detail),
        Line::from(""),
        Line::from(Span::styled(
            render_sparkline(tail(panel.sparkline, width)),
            Style::default().fg(theme.highlight),
        )),
    ];

    let block = Block::default()
        .title(panel.title)
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(border_color));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_stats(frame: &mut Frame, app: &App, data: &DashboardData, area: Rect) {
    let stats = &data.snapshot.stats;

    let rows = vec![
        Row::new(vec![
            Cell::from("Min"),
            Cell::from(format_reading(stats.voltage_min, "V")),
            Cell::from("Peak"),
            Cell::from(format_reading(stats.current_peak, "A")),
        ]),
        Row::new(vec![
            Cell::from("Max"),
            Cell::from(format_reading(stats.voltage_max, "V")),
            Cell::from("Low"),
            Cell::from(format_reading(stats.current_low, "A")),
        ]),
        Row::new(vec![
            Cell::from("Avg"),
            Cell::from(format_reading(stats.voltage_avg, "V")),
            Cell::from("Avg"),
            Cell::from(format_reading(stats.current_avg, "A")),
        ]),
        Row::new(vec![
            Cell::from("Stability"),
            Cell::from(format!("{:.1}%", stats.voltage_stability)),
            Cell::from("Frequency"),
            Cell::from(format!("{:.2} Hz", stats.frequency_hz)),
        ]),
    ];

    let header = Row::new(vec!["Voltage", "", "Current", ""])
        .height(1)
        .style(app.theme.header);

    let widths = [
        Constraint::Length(10),
        Constraint::Fill(1),
        Constraint::Length(10),
        Constraint::Fill(1),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(table, area);
}

fn render_recent_alerts(frame: &mut Frame, app: &App, data: &DashboardData, area: Rect) {
    let snapshot = &data.snapshot;

    let items: Vec<ListItem> = if snapshot.alerts.is_empty() {
        vec![ListItem::new(Span::styled(
            "No alerts",
            Style::default().add_modifier(Modifier::DIM),
        ))]
    } else {
        snapshot
            .alerts
            .iter()
            .take(RECENT_ALERTS)
            .map(|alert| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(
                            format!("{:<4} ", alert.severity.symbol()),
                            app.theme.status_style(alert.severity),
                        ),
                        Span::raw(alert.message.clone()),
                    ]),
                    Line::from(Span::styled(
                        format!("     {}", time_ago(alert.created_at_ms, snapshot.taken_at_ms)),
                        Style::default().add_modifier(Modifier::DIM),
                    )),
                ])
            })
            .collect()
    };

    let title = format!(" Recent Alerts ({}) ", snapshot.alerts.len());
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border)),
    );

    frame.render_widget(list, area);
}
