pub mod layout;
mod page_panels;
pub mod shell_view;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area, state.session.page());

    // Nothing of the page survives a wipe; only the status bar is left.
    if !state.session.is_destroyed() {
        if let Some(header) = app_layout.header {
            page_panels::render_header(frame, header, state);
        }
        shell_view::render(frame, app_layout.shell, state);
        if let Some(sidebar) = app_layout.sidebar {
            page_panels::render_sidebar(frame, sidebar, state);
        }
    }
    status_bar::render(frame, app_layout.status_bar, state);
}
