use std::sync::Arc;

use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use minsky::MinskyError;
use minsky::alerts::TelegramNotifier;
use minsky::client::WatchlistClient;
use minsky::config::fetch_config;
use minsky::poller::Poller;
use minsky::tui::{self, App, restore_terminal, setup_terminal};
use minsky::tui::event::{spawn_event_reader, spawn_tick_timer};

/// UI tick interval driving transient status updates.
const UI_TICK_MS: u64 = 250;

#[tokio::main]
async fn main() -> Result<(), MinskyError> {
    // Logs go to stderr so they never corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("minsky=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app_config = fetch_config()?;

    let client = WatchlistClient::new(&app_config.api.base_url)?;
    let notifier = match app_config.telegram {
        Some(telegram) => Some(Arc::new(TelegramNotifier::new(telegram)?)),
        None => None,
    };

    let (tx, rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), UI_TICK_MS);
    Poller::new(client, app_config.api.poll_interval, tx).spawn();

    let mut terminal = setup_terminal()?;
    let result = tui::run(&mut terminal, App::new(), rx, notifier).await;
    restore_terminal(&mut terminal)?;

    result
}
