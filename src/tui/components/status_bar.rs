//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, FetchStatus};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let status_color = match app.fetch_status {
        FetchStatus::Live { .. } => Color::Green,
        FetchStatus::Waiting => Color::Yellow,
        FetchStatus::Failed { .. } => Color::Red,
    };

    let age_span = match app.fetch_status {
        FetchStatus::Live { at } | FetchStatus::Failed { at } => Span::styled(
            format!(" {}s ago ", at.elapsed().as_secs()),
            Style::default().fg(Color::White),
        ),
        FetchStatus::Waiting => Span::raw(""),
    };

    let error_span = if let Some(ref error) = app.error_message {
        Span::styled(
            format!(" {} ", error.message),
            Style::default().fg(Color::Red),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.fetch_status.label()),
            Style::default().fg(status_color),
        ),
        Span::raw("│"),
        age_span,
        Span::raw("│"),
        error_span,
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
