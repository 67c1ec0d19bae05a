//! Header and sidebar elements of the page.

use crate::app::state::*;
use crate::shell::{Element, Region};
use crate::ui::layout::panel_height;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let lines: Vec<Line> = state
        .session
        .page()
        .in_region(Region::Header)
        .flat_map(|el| el.lines.iter())
        .map(|l| Line::from(Span::styled(l.as_str(), Theme::header())))
        .collect();

    let width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let x = area.x + area.width.saturating_sub(width) / 2;
    let centered = Rect::new(x, area.y, width.min(area.width), area.height);
    frame.render_widget(Paragraph::new(lines), centered);
}

pub fn render_sidebar(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Sidebar;
    let mut y = area.y;

    for el in state.session.page().in_region(Region::Sidebar) {
        let height = panel_height(el.lines.len()).min(area.bottom().saturating_sub(y));
        if height < 3 {
            break;
        }
        let panel = Rect::new(area.x, y, area.width, height);
        render_panel(frame, panel, el, focused);
        y += height;
    }
}

fn render_panel(frame: &mut Frame, area: Rect, el: &Element, focused: bool) {
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let title = if el.title.is_empty() {
        format!(" {} ", el.id)
    } else {
        format!(" {} ", el.title)
    };

    let block = Block::default()
        .title(title)
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let inner = block.inner(area);
    let lines: Vec<Line> = el
        .lines
        .iter()
        .map(|l| Line::from(Span::styled(fit(l, inner.width as usize), Theme::panel_text())))
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Truncate to `width` columns, marking the cut with an ellipsis.
fn fit(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
