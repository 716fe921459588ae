//! Summary counters bar.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::App;

/// Renders the three snapshot counters.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.summary;

    let pump_style = if summary.pumps > 0 {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let line = Line::from(vec![
        Span::styled(format!(" Pumps: {} ", summary.pumps), pump_style),
        Span::raw("│"),
        Span::styled(
            format!(" Score ≥ 60: {} ", summary.strong_scores),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("│"),
        Span::styled(
            format!(" Total: {} ", summary.total),
            Style::default().fg(Color::White),
        ),
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
