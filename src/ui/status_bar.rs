use crate::app::state::*;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Focus indicator
    let focus_name = if state.session.is_destroyed() {
        "NONE"
    } else {
        match state.focus {
            FocusPanel::Input => "INPUT",
            FocusPanel::Log => "LOG",
            FocusPanel::Sidebar => "SIDEBAR",
        }
    };
    let indicator = format!(" [{}] ", focus_name);

    // Pad to fill remaining space
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + indicator.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(indicator, Theme::status_focus()));

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
