//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::Paragraph,
};

use super::app::App;
use super::components::{detail, status_bar, summary_bar, watchlist_table};

/// Screen regions of the dashboard.
///
/// Shared between the renderer and mouse hit-testing so both always agree
/// on where the table rows are.
pub struct AppLayout {
    pub summary: Rect,
    pub table: Rect,
    pub status: Rect,
    pub help: Rect,
}

/// Splits the terminal area into the dashboard regions.
pub fn layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Summary counters
            Constraint::Min(5),    // Watchlist table
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Keybindings help
        ])
        .split(area);

    AppLayout {
        summary: chunks[0],
        table: chunks[1],
        status: chunks[2],
        help: chunks[3],
    }
}

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &mut App) {
    app.viewport = frame.area();
    let layout = layout(frame.area());

    summary_bar::render(frame, layout.summary, app);
    watchlist_table::render(frame, layout.table, app);
    status_bar::render(frame, layout.status, app);
    render_keybindings(frame, layout.help);

    // The overlay draws last so it sits on top of the table.
    if let Some(ref detail_view) = app.detail {
        detail::render(frame, frame.area(), detail_view);
    }
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect) {
    let help = Line::from(" q quit │ j/k or ↑/↓ select │ enter/click details │ esc close ");
    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
