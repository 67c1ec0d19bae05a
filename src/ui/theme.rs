use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

pub struct Theme;

impl Theme {
    pub const ACCENT_GREEN: Color = Color::Rgb(90, 210, 130);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 120);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn timestamp() -> Style {
        Style::default().fg(Self::TEXT_MUTED)
    }

    pub fn prompt() -> Style {
        Style::default()
            .fg(Self::ACCENT_GREEN)
            .add_modifier(Modifier::BOLD)
    }

    pub fn command_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn command_result() -> Style {
        Style::default().fg(Self::ACCENT_AMBER)
    }

    pub fn cursor() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn header() -> Style {
        Style::default().fg(Self::ACCENT_TEAL)
    }

    pub fn panel_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }

    pub fn status_focus() -> Style {
        Style::default().fg(Color::Cyan).bg(Color::DarkGray)
    }
}
