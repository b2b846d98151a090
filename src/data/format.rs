//! Text formatting for dashboard values.

use intellifence_types::Change;

/// Relative age of an alert, e.g. "Just now" or "3 minutes ago".
pub fn time_ago(created_at_ms: u64, now_ms: u64) -> String {
    let minutes = now_ms.saturating_sub(created_at_ms) / 60_000;
    match minutes {
        0 => "Just now".to_string(),
        1 => "1 minute ago".to_string(),
        2..=59 => format!("{} minutes ago", minutes),
        _ => {
            let hours = minutes / 60;
            if hours == 1 {
                "1 hour ago".to_string()
            } else {
                format!("{} hours ago", hours)
            }
        }
    }
}

/// Arrow and percentage for a metric change, e.g. "↑ 0.4%".
pub fn format_change(change: &Change) -> String {
    let arrow = if change.absolute > 0.0 {
        '↑'
    } else if change.absolute < 0.0 {
        '↓'
    } else {
        '→'
    };
    format!("{} {:.1}%", arrow, change.percent.abs())
}

/// Fixed-precision value with unit, e.g. "230.5 V".
pub fn format_reading(value: f64, unit: &str) -> String {
    format!("{:.1} {}", value, unit)
}

/// Seconds elapsed as a short label, e.g. "1.5s".
pub fn format_elapsed(elapsed: std::time::Duration) -> String {
    let secs = elapsed.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{}m{}s", elapsed.as_secs() / 60, elapsed.as_secs() % 60)
    }
}
