//! Watchlist table component.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Row, Table},
};
use rust_decimal::Decimal;

use crate::models::{ScoreBand, TickerRecord};
use crate::tui::app::App;

/// Renders the snapshot as a table, one row per record in sequence order.
pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .title(" Watchlist ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let header = Row::new(vec![
        "Ticker", "Price", "Change%", "Vol Ratio", "RSI", "EMA", "Score", "Pump", "Updated",
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = app.records.iter().map(record_row).collect();

    let widths = [
        Constraint::Length(8),
        Constraint::Length(10),
        Constraint::Length(8),
        Constraint::Length(9),
        Constraint::Length(7),
        Constraint::Length(8),
        Constraint::Length(6),
        Constraint::Length(6),
        Constraint::Min(19),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .column_spacing(1);

    frame.render_stateful_widget(table, area, &mut app.table_state);
}

/// Builds one table row with presentation derived from the record.
fn record_row(record: &TickerRecord) -> Row<'static> {
    let change_color = if record.change_percent >= Decimal::ZERO {
        Color::Green
    } else {
        Color::Red
    };

    let ema_style = if record.ema_bullish() {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    };

    let score_style = match record.score_band() {
        ScoreBand::High => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        ScoreBand::Mid => Style::default().fg(Color::Yellow),
        ScoreBand::Low => Style::default().fg(Color::DarkGray),
    };

    let pump_cell = if record.is_pump {
        Cell::from(Span::styled(
            " PUMP ",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ))
    } else {
        Cell::from("")
    };

    Row::new(vec![
        Cell::from(record.ticker.clone()),
        Cell::from(record.price.to_string()),
        Cell::from(Span::styled(
            record.change_percent.to_string(),
            Style::default().fg(change_color),
        )),
        Cell::from(record.volume_ratio.to_string()),
        Cell::from(record.rsi.to_string()),
        Cell::from(Span::styled(record.ema_signal.clone(), ema_style)),
        Cell::from(Span::styled(record.score.to_string(), score_style)),
        pump_cell,
        Cell::from(record.last_update.clone()),
    ])
}
