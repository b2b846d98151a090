//! Light and dark palettes, chosen from the terminal background.

use intellifence_types::Severity;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

/// Colours and styles shared by every view.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent for focus, headers and the active tab.
    pub highlight: Color,
    pub warning: Color,
    pub critical: Color,
    pub healthy: Color,
    pub border: Color,
    pub header: Style,
    pub selected: Style,
    pub tab_active: Style,
    pub tab_inactive: Style,
    pub border_type: BorderType,
}

impl Theme {
    /// Derive every style from an accent, a muted tone and a selection background.
    fn from_palette(accent: Color, muted: Color, selection: Color, warning: Color) -> Self {
        let accent_bold = Style::default().fg(accent).add_modifier(Modifier::BOLD);
        Self {
            highlight: accent,
            warning,
            critical: Color::Red,
            healthy: Color::Green,
            border: muted,
            header: accent_bold,
            selected: Style::default().bg(selection).add_modifier(Modifier::BOLD),
            tab_active: accent_bold,
            tab_inactive: Style::default().fg(muted),
            border_type: BorderType::Rounded,
        }
    }

    pub fn dark() -> Self {
        Self::from_palette(Color::Cyan, Color::Gray, Color::DarkGray, Color::Yellow)
    }

    /// Yellow washes out on white, so warnings use dark goldenrod.
    pub fn light() -> Self {
        Self::from_palette(
            Color::Blue,
            Color::DarkGray,
            Color::LightBlue,
            Color::Rgb(184, 134, 11),
        )
    }

    /// Pick light or dark from the terminal's background luma.
    ///
    /// Falls back to dark when the terminal does not answer.
    pub fn auto_detect() -> Self {
        if terminal_light::luma().is_ok_and(|luma| luma > 0.5) {
            Self::light()
        } else {
            Self::dark()
        }
    }

    pub fn severity_color(&self, severity: Severity) -> Color {
        match severity {
            Severity::Normal => self.healthy,
            Severity::Warning => self.warning,
            Severity::Critical => self.critical,
        }
    }

    /// Critical readings are bold as well as red.
    pub fn status_style(&self, severity: Severity) -> Style {
        let style = Style::default().fg(self.severity_color(severity));
        if severity == Severity::Critical {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }
}
