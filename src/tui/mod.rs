//! Terminal User Interface for the minsky watchlist dashboard.
//!
//! Provides a Ratatui-based TUI that renders the live snapshot as a table
//! with summary counters and a per-record detail overlay.

pub mod app;
pub mod components;
pub mod event;
pub mod terminal;
pub mod ui;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

pub use app::App;
pub use event::{Event, Message};
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;

use crate::Result;
use crate::alerts::TelegramNotifier;
use event::Action;

/// Runs the dashboard until the user quits or every sender is gone.
///
/// The loop owns the application state: it drains the message channel,
/// applies each message through [`event::update`], executes any returned
/// action, and redraws. Pump alert delivery is fire-and-forget so a slow
/// Telegram round-trip never stalls rendering.
///
/// # Errors
///
/// Returns [`MinskyError::Terminal`](crate::MinskyError::Terminal) if a
/// draw fails. Fetch failures never surface here; they arrive as
/// [`Message::FetchFailed`] and only touch the status bar.
pub async fn run(
    terminal: &mut Tui,
    mut app: App,
    mut rx: mpsc::UnboundedReceiver<Message>,
    notifier: Option<Arc<TelegramNotifier>>,
) -> Result<()> {
    draw(terminal, &mut app)?;

    while let Some(message) = rx.recv().await {
        if let Some(action) = event::update(&mut app, message) {
            match action {
                Action::NotifyPumps(tickers) => {
                    for ticker in tickers {
                        info!(%ticker, "pump detected");
                        if let Some(notifier) = &notifier {
                            let notifier = Arc::clone(notifier);
                            tokio::spawn(async move {
                                notifier.send_pump_alert(&ticker).await;
                            });
                        }
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }

        draw(terminal, &mut app)?;
    }

    Ok(())
}

/// Renders one frame.
fn draw(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal
        .draw(|frame| ui::render(frame, app))
        .map_err(|e| crate::MinskyError::Terminal(format!("draw failed: {e}")))?;
    Ok(())
}
