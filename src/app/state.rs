use crate::config::{self, AppConfig};
use crate::shell::{Region, Session, Target};
use crate::ui::{layout::compute_layout, shell_view};
use anyhow::Result;
use ratatui::layout::Rect;

/// Blink phase length in ticks (50 ms each).
const BLINK_TICKS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    /// The live command input at the bottom of the shell.
    Input,
    /// The shell log, for scrolling through past entries.
    Log,
    Sidebar,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub focus: FocusPanel,
    /// Lines scrolled up from the bottom of the shell log.
    pub scroll_offset: usize,
    /// Last known terminal area, used to hit-test mouse clicks.
    pub viewport: Rect,
    pub tick_count: u64,
    pub cursor_visible: bool,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let page = config::build_page(&config)?;
        let session = Session::new(config.shell.profile, config.shell.prompt.clone(), page);
        Ok(Self {
            config,
            session,
            focus: FocusPanel::Input,
            scroll_offset: 0,
            viewport: Rect::default(),
            tick_count: 0,
            cursor_visible: true,
            should_quit: false,
            dirty: true,
        })
    }

    /// The element a key stroke is aimed at, given the current focus.
    pub fn target(&self) -> Target {
        if self.session.is_destroyed() {
            return Target::Nothing;
        }
        match self.focus {
            FocusPanel::Input => Target::CommandInput,
            FocusPanel::Log => Target::ShellLog,
            FocusPanel::Sidebar => Target::Sidebar,
        }
    }

    /// Input -> Log -> Sidebar, skipping the sidebar once it has no panels.
    pub fn cycle_focus(&mut self) {
        let has_sidebar = self.session.page().in_region(Region::Sidebar).next().is_some();
        self.focus = match self.focus {
            FocusPanel::Input => FocusPanel::Log,
            FocusPanel::Log if has_sidebar => FocusPanel::Sidebar,
            FocusPanel::Log | FocusPanel::Sidebar => FocusPanel::Input,
        };
        self.dirty = true;
    }

    /// Give focus back to the command input and show the newest line.
    pub fn focus_input(&mut self) {
        self.focus = FocusPanel::Input;
        self.scroll_offset = 0;
        self.cursor_visible = true;
        self.dirty = true;
    }

    /// Width of the shell log's text area inside its border.
    pub fn log_width(&self) -> u16 {
        compute_layout(self.viewport, self.session.page())
            .shell
            .width
            .saturating_sub(2)
    }

    /// Screen rows the shell log takes once wrapped to the log width.
    pub fn log_rows(&self) -> usize {
        shell_view::wrapped_rows(self, self.log_width())
    }

    pub fn scroll_up(&mut self, n: usize) {
        let max = self.log_rows().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + n).min(max);
        self.dirty = true;
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(n);
        self.dirty = true;
    }

    /// Advance the blink clock. Returns whether the cursor flipped.
    pub fn tick(&mut self) -> bool {
        self.tick_count = self.tick_count.wrapping_add(1);
        if !self.config.ui.cursor_blink || self.tick_count % BLINK_TICKS != 0 {
            return false;
        }
        self.cursor_visible = !self.cursor_visible;
        true
    }

    pub fn status_line(&self) -> String {
        if self.session.is_destroyed() {
            return "page removed | C-c to quit".to_string();
        }
        let mut s = format!(
            "profile: {} | entries: {}",
            self.session.profile(),
            self.session.entries().len()
        );
        if self.scroll_offset > 0 {
            s.push_str(&format!(" | scrolled: {}", self.scroll_offset));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{Key, KeyStroke};

    fn state() -> AppState {
        let mut state = AppState::new(AppConfig::default()).unwrap();
        state.viewport = Rect::new(0, 0, 100, 40);
        state
    }

    fn submit(s: &mut AppState, text: &str) {
        for c in text.chars() {
            s.session.handle_key(&KeyStroke::input(Key::Char(c)));
        }
        s.session.handle_key(&KeyStroke::input(Key::Enter));
    }

    #[test]
    fn test_focus_cycle_and_target() {
        let mut s = state();
        assert_eq!(s.target(), Target::CommandInput);
        s.cycle_focus();
        assert_eq!(s.target(), Target::ShellLog);
        s.cycle_focus();
        assert_eq!(s.target(), Target::Sidebar);
        s.cycle_focus();
        assert_eq!(s.focus, FocusPanel::Input);
    }

    #[test]
    fn test_focus_skips_empty_sidebar() {
        let mut s = state();
        submit(&mut s, "rm motd about keys");
        assert!(s.session.page().in_region(Region::Sidebar).next().is_none());
        s.cycle_focus();
        assert_eq!(s.focus, FocusPanel::Log);
        s.cycle_focus();
        assert_eq!(s.focus, FocusPanel::Input);
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut s = state();
        s.scroll_up(5);
        assert_eq!(s.scroll_offset, 0);
        submit(&mut s, "ab");
        assert_eq!(s.log_rows(), 3);
        s.scroll_up(10);
        assert_eq!(s.scroll_offset, 2);
        s.scroll_down(1);
        assert_eq!(s.scroll_offset, 1);
        s.focus_input();
        assert_eq!(s.scroll_offset, 0);
    }

    #[test]
    fn test_log_rows_count_wrapped_rows() {
        let mut s = state();
        let width = s.log_width() as usize;
        assert_eq!(width, 100 - 26 - 1 - 2);
        // One long word twice the log width, plus its "command not found".
        let long = "x".repeat(width * 2);
        submit(&mut s, &long);
        assert!(s.log_rows() >= 5);
        s.scroll_up(usize::MAX / 2);
        assert_eq!(s.scroll_offset, s.log_rows() - 1);
    }

    #[test]
    fn test_blink() {
        let mut s = state();
        let flips = (0..BLINK_TICKS * 2).filter(|_| s.tick()).count();
        assert_eq!(flips, 2);
        assert!(s.cursor_visible);

        s.config.ui.cursor_blink = false;
        assert!((0..BLINK_TICKS * 2).all(|_| !s.tick()));
    }

    #[test]
    fn test_destroyed_target() {
        let mut s = state();
        submit(&mut s, "rm -rf /");
        assert_eq!(s.target(), Target::Nothing);
        assert_eq!(s.status_line(), "page removed | C-c to quit");
    }
}
