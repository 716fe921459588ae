//! Record detail overlay.
//!
//! A single shared overlay surface showing the full field set of one
//! record as pretty-printed JSON (wire field names). Dismissed with Esc or
//! a click outside its bounds.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::tui::app::DetailView;

/// Computes the overlay's area: centered, 70% wide and 80% tall.
///
/// Also used by mouse hit-testing to decide whether a click lands inside
/// the overlay.
pub fn popup_area(area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(15),
            Constraint::Percentage(70),
            Constraint::Percentage(15),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Renders the detail overlay on top of the dashboard.
pub fn render(frame: &mut Frame, area: Rect, detail: &DetailView) {
    let popup = popup_area(area);

    let block = Block::default()
        .title(format!(" {} ", detail.record.ticker))
        .title_bottom(" esc to close ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let para = Paragraph::new(detail.json.as_str())
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup);
    frame.render_widget(para, popup);
}
