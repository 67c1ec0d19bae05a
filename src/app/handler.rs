//! Adapter between crossterm events and the shell session.

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::shell::{Key, KeyStroke, Outcome};
use crate::ui::layout::compute_layout;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;

const PAGE_SCROLL: usize = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            if state.tick() {
                state.dirty = true;
            }
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => {
            handle_mouse(state, mouse);
            vec![]
        }
        CEvent::Resize(w, h) => {
            state.viewport = Rect::new(0, 0, w, h);
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Windows also reports releases; only act once per key.
    if key.kind != KeyEventKind::Press {
        return vec![];
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    if state.session.is_destroyed() {
        return vec![];
    }

    match key.code {
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::Esc => {
            state.focus_input();
            return vec![];
        }
        _ => {}
    }

    if state.focus == FocusPanel::Log && handle_log_key(state, key.code) {
        return vec![];
    }

    let stroke = KeyStroke::new(state.target(), key_from_crossterm(&key));
    let outcome = state.session.handle_key(&stroke);
    tracing::trace!(key = %stroke.key.name(), target = ?stroke.target, ?outcome, "key");
    match outcome {
        Outcome::Ignored => vec![],
        Outcome::Edited => {
            state.cursor_visible = true;
            state.scroll_offset = 0;
            state.dirty = true;
            vec![]
        }
        Outcome::Executed => {
            state.focus_input();
            vec![]
        }
        Outcome::Destroyed => {
            state.scroll_offset = 0;
            state.dirty = true;
            vec![Action::Bell]
        }
    }
}

/// Scrolling keys while the log has focus. Returns whether the key was used.
fn handle_log_key(state: &mut AppState, code: KeyCode) -> bool {
    match code {
        KeyCode::Up => state.scroll_up(1),
        KeyCode::Down => state.scroll_down(1),
        KeyCode::PageUp => state.scroll_up(PAGE_SCROLL),
        KeyCode::PageDown => state.scroll_down(PAGE_SCROLL),
        KeyCode::Home => state.scroll_up(usize::MAX / 2),
        KeyCode::End => state.scroll_down(usize::MAX),
        _ => return false,
    }
    true
}

/// Clicking the shell refocuses the command input; clicking the sidebar
/// focuses the sidebar.
fn handle_mouse(state: &mut AppState, mouse: MouseEvent) {
    if state.session.is_destroyed() {
        return;
    }
    let layout = compute_layout(state.viewport, state.session.page());
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if layout.in_shell(mouse.column, mouse.row) {
                state.focus_input();
            } else if layout.in_sidebar(mouse.column, mouse.row) {
                state.focus = FocusPanel::Sidebar;
                state.dirty = true;
            }
        }
        MouseEventKind::ScrollUp if layout.in_shell(mouse.column, mouse.row) => state.scroll_up(1),
        MouseEventKind::ScrollDown if layout.in_shell(mouse.column, mouse.row) => {
            state.scroll_down(1)
        }
        _ => {}
    }
}

/// Reduce a crossterm key to the editor's view of it. Chords with Ctrl or
/// Alt are named keys, never printable input.
pub fn key_from_crossterm(key: &KeyEvent) -> Key {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    match key.code {
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        // AltGr arrives as Ctrl+Alt on Windows and still types a character.
        KeyCode::Char(c) if ctrl && alt => Key::Char(c),
        KeyCode::Char(c) if ctrl => Key::Named(format!("Control+{}", c)),
        KeyCode::Char(c) if alt => Key::Named(format!("Alt+{}", c)),
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Left => Key::Named("ArrowLeft".into()),
        KeyCode::Right => Key::Named("ArrowRight".into()),
        KeyCode::Up => Key::Named("ArrowUp".into()),
        KeyCode::Down => Key::Named("ArrowDown".into()),
        KeyCode::Home => Key::Named("Home".into()),
        KeyCode::End => Key::Named("End".into()),
        KeyCode::PageUp => Key::Named("PageUp".into()),
        KeyCode::PageDown => Key::Named("PageDown".into()),
        KeyCode::Tab | KeyCode::BackTab => Key::Named("Tab".into()),
        KeyCode::Delete => Key::Named("Delete".into()),
        KeyCode::Insert => Key::Named("Insert".into()),
        KeyCode::Esc => Key::Named("Escape".into()),
        KeyCode::F(n) => Key::Named(format!("F{}", n)),
        _ => Key::Named("Unidentified".into()),
    }
}
