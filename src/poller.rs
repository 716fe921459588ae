//! Background fetch cycle for the watchlist endpoint.
//!
//! Polls [`WatchlistClient::fetch_live`] on a fixed interval and delivers
//! each outcome to the TUI channel as a [`Message`]. Fetches are awaited
//! inline and missed ticks are skipped, so at most one request is in flight
//! at a time. Every outcome carries a monotonically increasing generation
//! number; the application state discards non-increasing generations, so a
//! delayed snapshot can never replace a newer one.
//!
//! Fetch failures are logged and reported as [`Message::FetchFailed`], then
//! forgotten: the next tick retries with no backoff and the previously
//! rendered snapshot stays visible.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::WatchlistClient;
use crate::tui::event::Message;

/// Drives the fetch cycle and feeds outcomes to the TUI.
pub struct Poller {
    client: WatchlistClient,
    interval: Duration,
    tx: mpsc::UnboundedSender<Message>,
}

impl Poller {
    /// Creates a poller that fetches every `interval` and sends outcomes on
    /// `tx`.
    pub fn new(
        client: WatchlistClient,
        interval: Duration,
        tx: mpsc::UnboundedSender<Message>,
    ) -> Self {
        Self {
            client,
            interval,
            tx,
        }
    }

    /// Spawns the polling loop on the runtime.
    ///
    /// The loop runs until the receiving side of the channel is dropped.
    pub fn spawn(self) -> JoinHandle<()> {
        tokio::spawn(self.run())
    }

    /// Runs the polling loop.
    ///
    /// The first fetch fires immediately; subsequent fetches follow the
    /// configured interval.
    async fn run(self) {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

        let mut generation: u64 = 0;

        loop {
            ticker.tick().await;
            generation += 1;

            let message = match self.client.fetch_live().await {
                Ok(records) => {
                    debug!(generation, records = records.len(), "snapshot fetched");
                    Message::Snapshot {
                        generation,
                        records,
                    }
                }
                Err(error) => {
                    warn!(generation, %error, "watchlist fetch failed");
                    Message::FetchFailed {
                        generation,
                        error: error.to_string(),
                    }
                }
            };

            if self.tx.send(message).is_err() {
                break;
            }
        }
    }
}
