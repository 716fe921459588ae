//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;
use tokio::sync::mpsc;

use crate::models::TickerRecord;

use super::app::App;
use super::components::detail;
use super::ui;

/// Events that can occur in the application.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// A mouse button was pressed or released.
    Mouse(MouseEvent),
    /// Terminal was resized.
    Resize(u16, u16),
    /// Periodic tick for UI updates.
    Tick,
}

/// Messages that update application state.
#[derive(Debug)]
pub enum Message {
    /// Input event from terminal.
    Input(Event),

    /// A fetch cycle completed with a fresh snapshot.
    Snapshot {
        generation: u64,
        records: Vec<TickerRecord>,
    },
    /// A fetch cycle failed; the previous render stays visible.
    FetchFailed { generation: u64, error: String },

    /// Request to quit the application.
    Quit,
}

/// Actions that require external handling in the run loop.
#[derive(Debug)]
pub enum Action {
    /// Deliver pump alerts for these tickers.
    NotifyPumps(Vec<String>),
}

/// Spawns a task that polls for terminal events and sends them to a channel.
pub fn spawn_event_reader(tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        loop {
            // Poll for events with a 50ms timeout
            match tokio::task::spawn_blocking(|| {
                if event::poll(Duration::from_millis(50)).unwrap_or(false) {
                    event::read().ok()
                } else {
                    None
                }
            })
            .await
            {
                Ok(Some(CrosstermEvent::Key(key))) => {
                    if tx.send(Message::Input(Event::Key(key))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Mouse(mouse))) => {
                    if tx.send(Message::Input(Event::Mouse(mouse))).is_err() {
                        break;
                    }
                }
                Ok(Some(CrosstermEvent::Resize(w, h))) => {
                    if tx.send(Message::Input(Event::Resize(w, h))).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        }
    });
}

/// Spawns a task that sends periodic tick events.
pub fn spawn_tick_timer(tx: mpsc::UnboundedSender<Message>, interval_ms: u64) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(interval_ms));
        loop {
            interval.tick().await;
            if tx.send(Message::Input(Event::Tick)).is_err() {
                break;
            }
        }
    });
}

/// Updates application state based on a message.
pub fn update(app: &mut App, message: Message) -> Option<Action> {
    match message {
        Message::Input(event) => handle_input(app, event),
        Message::Snapshot {
            generation,
            records,
        } => {
            let fresh_pumps = app.apply_snapshot(generation, records);
            if fresh_pumps.is_empty() {
                None
            } else {
                Some(Action::NotifyPumps(fresh_pumps))
            }
        }
        Message::FetchFailed { generation, error } => {
            app.record_failure(generation, error);
            None
        }
        Message::Quit => {
            app.should_quit = true;
            None
        }
    }
}

/// Handles input events and updates application state.
fn handle_input(app: &mut App, event: Event) -> Option<Action> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Resize(width, height) => {
            app.viewport = ratatui::layout::Rect::new(0, 0, width, height);
            None
        }
        Event::Tick => {
            app.clear_stale_errors();
            None
        }
    }
}

/// Handles key press events.
fn handle_key(app: &mut App, key: KeyEvent) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return None;
    }

    // The overlay is modal: while open it captures every key.
    if app.detail.is_some() {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter) {
            app.close_detail();
        }
        return None;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.select_next(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous(),
        KeyCode::Enter => app.open_detail(),
        _ => {}
    }
    None
}

/// Handles mouse events.
///
/// A left click on a table row activates it (selects and opens the detail
/// overlay, like the source page's row click). While the overlay is open, a
/// click outside its bounds dismisses it and a click inside is ignored.
fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Option<Action> {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return None;
    }
    let position = Position::new(mouse.column, mouse.row);

    if app.detail.is_some() {
        if !detail::popup_area(app.viewport).contains(position) {
            app.close_detail();
        }
        return None;
    }

    if let Some(index) = row_at(app, position) {
        app.open_detail_at(index);
    }
    None
}

/// Maps a click position to a snapshot row index, if it lands on one.
///
/// Uses the same deterministic layout as the renderer: the first data row
/// sits below the table's top border and header line, and the scroll offset
/// of the table state shifts visible rows.
fn row_at(app: &App, position: Position) -> Option<usize> {
    let table = ui::layout(app.viewport).table;
    let first_row_y = table.y + 2;
    let last_row_y = table.bottom().saturating_sub(2);

    let inside_x = position.x > table.x && position.x < table.right().saturating_sub(1);
    let inside_y = position.y >= first_row_y && position.y <= last_row_y;
    if !inside_x || !inside_y {
        return None;
    }

    let index = app.table_state.offset() + (position.y - first_row_y) as usize;
    (index < app.records.len()).then_some(index)
}
