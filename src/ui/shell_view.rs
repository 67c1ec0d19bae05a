use crate::app::state::*;
use crate::shell::Entry;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
};

const CURSOR: &str = "█";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(state.focus, FocusPanel::Input | FocusPanel::Log);
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let title = if state.focus == FocusPanel::Log {
        " shell (scroll) "
    } else {
        " shell "
    };

    let block = Block::default()
        .title(title)
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = log_paragraph(state);
    let available_height = inner.height as usize;
    let total = paragraph.line_count(inner.width);

    // Compute visible range of wrapped rows with scroll offset
    let end = total.saturating_sub(state.scroll_offset);
    let start = end.saturating_sub(available_height);
    let top = u16::try_from(start).unwrap_or(u16::MAX);

    frame.render_widget(paragraph.scroll((top, 0)), inner);

    if total > available_height {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(available_height)).position(start);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .thumb_symbol("┃")
            .track_symbol(Some("│"));
        frame.render_stateful_widget(scrollbar, area, &mut scrollbar_state);
    }
}

/// Rows the log occupies when wrapped at `width` columns.
pub fn wrapped_rows(state: &AppState, width: u16) -> usize {
    log_paragraph(state).line_count(width)
}

fn log_paragraph(state: &AppState) -> Paragraph<'static> {
    Paragraph::new(shell_lines(state)).wrap(Wrap { trim: false })
}

/// Every finalized entry followed by its result, then the live line.
fn shell_lines(state: &AppState) -> Vec<Line<'static>> {
    let session = &state.session;
    let ui = &state.config.ui;
    let mut lines = Vec::new();

    for entry in session.entries() {
        let mut spans = Vec::new();
        if ui.show_timestamps {
            spans.push(timestamp(entry, &ui.timestamp_format));
        }
        spans.push(Span::styled(session.prompt().to_string(), Theme::prompt()));
        spans.push(Span::styled(entry.text.clone(), Theme::command_text()));
        lines.push(Line::from(spans));

        if !entry.result.is_empty() {
            lines.push(Line::from(Span::styled(
                entry.result.clone(),
                Theme::command_result(),
            )));
        }
    }

    let mut current = vec![
        Span::styled(session.prompt().to_string(), Theme::prompt()),
        Span::styled(session.line().to_string(), Theme::command_text()),
    ];
    if state.focus == FocusPanel::Input && state.cursor_visible {
        current.push(Span::styled(CURSOR, Theme::cursor()));
    }
    lines.push(Line::from(current));

    lines
}

fn timestamp(entry: &Entry, format: &str) -> Span<'static> {
    Span::styled(
        format!("[{}] ", entry.submitted_at.format(format)),
        Theme::timestamp(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::shell::{Key, KeyStroke};
    use crate::ui::layout::compute_layout;
    use ratatui::backend::TestBackend;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_follow_entries() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        for text in ["foo", "rm motd"] {
            for c in text.chars() {
                state.session.handle_key(&KeyStroke::input(Key::Char(c)));
            }
            state.session.handle_key(&KeyStroke::input(Key::Enter));
        }
        for c in "ba".chars() {
            state.session.handle_key(&KeyStroke::input(Key::Char(c)));
        }

        let lines: Vec<String> = shell_lines(&state).iter().map(line_text).collect();
        assert_eq!(
            lines,
            vec![
                "guest@fauxterm:~$ foo".to_string(),
                "foo: command not found".to_string(),
                "guest@fauxterm:~$ rm motd".to_string(),
                format!("guest@fauxterm:~$ ba{}", CURSOR),
            ]
        );
    }

    /// Concatenated text of the shell panel's inner rows.
    fn shell_text(state: &AppState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| crate::ui::render(f, state)).unwrap();
        let shell = compute_layout(Rect::new(0, 0, width, height), state.session.page())
            .shell
            .inner(Margin::new(1, 1));
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in shell.top()..shell.bottom() {
            for x in shell.left()..shell.right() {
                text.push_str(buffer[(x, y)].symbol());
            }
        }
        text
    }

    #[test]
    fn test_long_line_wraps_into_view() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state.viewport = Rect::new(0, 0, 80, 20);
        let typed = format!("{}TAILXYZ", "a".repeat(80));
        for c in typed.chars() {
            state.session.handle_key(&KeyStroke::input(Key::Char(c)));
        }
        assert!(state.session.line().ends_with("TAILXYZ"));

        let text = shell_text(&state, 80, 20);
        assert!(text.contains("TAILXYZ"));
        assert!(text.contains(CURSOR));
    }

    #[test]
    fn test_long_result_wraps_into_view() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state.viewport = Rect::new(0, 0, 80, 20);
        let typed = format!("{}END", "b".repeat(70));
        for c in typed.chars() {
            state.session.handle_key(&KeyStroke::input(Key::Char(c)));
        }
        state.session.handle_key(&KeyStroke::input(Key::Enter));

        let text = shell_text(&state, 80, 20);
        assert!(text.contains("END: command not found"));
    }

    #[test]
    fn test_cursor_hidden_when_unfocused() {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state.cycle_focus();
        let lines = shell_lines(&state);
        assert_eq!(line_text(&lines[0]), "guest@fauxterm:~$ ");
    }
}
