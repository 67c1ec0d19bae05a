use crate::shell::{Page, Region};
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

const SIDEBAR_WIDTH: u16 = 26;

pub struct AppLayout {
    /// Absent once every header element has been removed.
    pub header: Option<Rect>,
    pub shell: Rect,
    /// Absent once every sidebar element has been removed.
    pub sidebar: Option<Rect>,
    pub status_bar: Rect,
}

impl AppLayout {
    pub fn in_shell(&self, col: u16, row: u16) -> bool {
        self.shell.contains(Position::new(col, row))
    }

    pub fn in_sidebar(&self, col: u16, row: u16) -> bool {
        self.sidebar
            .is_some_and(|area| area.contains(Position::new(col, row)))
    }
}

/// Height of a bordered sidebar panel showing `lines` rows.
pub fn panel_height(lines: usize) -> u16 {
    rows(lines).saturating_add(2)
}

fn rows(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

pub fn compute_layout(area: Rect, page: &Page) -> AppLayout {
    // Main vertical split: header | content | status bar
    let header_height = page
        .in_region(Region::Header)
        .fold(0u16, |acc, el| acc.saturating_add(rows(el.lines.len())));

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header_height), // Header elements
            Constraint::Min(3),                // Shell + sidebar
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    let header = (header_height > 0).then_some(main_chunks[0]);
    let content = main_chunks[1];
    let status_bar = main_chunks[2];

    if page.in_region(Region::Sidebar).next().is_none() {
        return AppLayout {
            header,
            shell: content,
            sidebar: None,
            status_bar,
        };
    }

    // Horizontal: shell | gap | sidebar
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([Constraint::Min(30), Constraint::Length(SIDEBAR_WIDTH)])
        .split(content);

    AppLayout {
        header,
        shell: h_chunks[0],
        sidebar: Some(h_chunks[1]),
        status_bar,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::Element;

    fn page() -> Page {
        Page::new(vec![
            Element::new("banner", "", Region::Header, &["a", "b"]),
            Element::new("motd", "motd", Region::Sidebar, &["hi"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_full_page() {
        let layout = compute_layout(Rect::new(0, 0, 100, 40), &page());
        assert_eq!(layout.header.unwrap().height, 2);
        assert_eq!(layout.sidebar.unwrap().width, SIDEBAR_WIDTH);
        assert_eq!(layout.status_bar.y, 39);
        assert!(layout.in_shell(1, 5));
        assert!(layout.in_sidebar(99, 5));
        assert!(!layout.in_shell(99, 5));
    }

    #[test]
    fn test_huge_panels_saturate() {
        assert_eq!(panel_height(3), 5);
        assert_eq!(panel_height(usize::MAX), u16::MAX);
        assert_eq!(panel_height(u16::MAX as usize - 1), u16::MAX);

        let big: Vec<&str> = vec![""; 40_000];
        let page = Page::new(vec![
            Element::new("a", "", Region::Header, &big),
            Element::new("b", "", Region::Header, &big),
        ])
        .unwrap();
        let layout = compute_layout(Rect::new(0, 0, 100, 40), &page);
        assert!(layout.header.is_some());
    }

    #[test]
    fn test_collapses_removed_regions() {
        let mut page = page();
        page.remove("banner");
        page.remove("motd");
        let layout = compute_layout(Rect::new(0, 0, 100, 40), &page);
        assert!(layout.header.is_none());
        assert!(layout.sidebar.is_none());
        assert_eq!(layout.shell.width, 100);
        assert_eq!(layout.shell.y, 0);
    }
}
