//! Pump alert detection and delivery.
//!
//! A record arriving with `isPump` set triggers at most one alert per
//! ticker for the lifetime of the process. Alerts are always logged;
//! delivery via the Telegram Bot API happens only when credentials are
//! configured, and delivery failures never disturb the dashboard.

use std::collections::HashSet;
use std::time::Duration;

use serde::Serialize;
use tracing::{info, warn};

use crate::config::TelegramConfig;
use crate::models::TickerRecord;

/// Per-request timeout for alert delivery.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// Remembers which tickers have already triggered a pump alert.
#[derive(Debug, Default)]
pub struct PumpTracker {
    seen: HashSet<String>,
}

impl PumpTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tickers in `records` that are flagged as pumps and have
    /// not alerted before, in snapshot order, marking them as seen.
    pub fn detect(&mut self, records: &[TickerRecord]) -> Vec<String> {
        let mut fresh = Vec::new();
        for record in records {
            if record.is_pump && !self.seen.contains(&record.ticker) {
                self.seen.insert(record.ticker.clone());
                fresh.push(record.ticker.clone());
            }
        }
        fresh
    }
}

/// `sendMessage` request body for the Telegram Bot API.
#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Best-effort pump alert delivery over the Telegram Bot API.
pub struct TelegramNotifier {
    client: reqwest::Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    /// Creates a notifier for the configured bot and chat.
    ///
    /// # Errors
    ///
    /// Returns [`MinskyError::Network`](crate::MinskyError::Network) if the
    /// underlying HTTP client cannot be constructed.
    pub fn new(config: TelegramConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder().timeout(SEND_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// Sends a pump alert for `ticker`, logging and swallowing any failure.
    pub async fn send_pump_alert(&self, ticker: &str) {
        let text = format!("PUMP detected on {ticker}");
        let url = format!(
            "https://api.telegram.org/bot{}/sendMessage",
            self.config.token
        );
        let body = SendMessageRequest {
            chat_id: &self.config.chat_id,
            text: &text,
        };

        let result = self.client.post(&url).json(&body).send().await;
        match result.and_then(|r| r.error_for_status()) {
            Ok(_) => info!(ticker, "pump alert delivered"),
            Err(error) => warn!(ticker, %error, "pump alert delivery failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn record(ticker: &str, is_pump: bool) -> TickerRecord {
        TickerRecord {
            ticker: ticker.to_string(),
            price: dec!(4.20),
            change_percent: dec!(12.0),
            volume_ratio: dec!(3.1),
            rsi: dec!(68.0),
            ema_signal: "bullish".to_string(),
            score: dec!(85),
            is_pump,
            last_update: "2024-05-01 14:30:00".to_string(),
        }
    }

    #[test]
    fn alerts_once_per_ticker() {
        let mut tracker = PumpTracker::new();
        let snapshot = vec![record("ABC", true), record("XYZ", false)];

        assert_eq!(tracker.detect(&snapshot), vec!["ABC".to_string()]);
        // Same snapshot again: ABC already alerted.
        assert!(tracker.detect(&snapshot).is_empty());
    }

    #[test]
    fn new_pumps_alert_in_snapshot_order() {
        let mut tracker = PumpTracker::new();
        tracker.detect(&[record("ABC", true)]);

        let next = vec![record("ZZZ", true), record("ABC", true), record("AAA", true)];
        assert_eq!(
            tracker.detect(&next),
            vec!["ZZZ".to_string(), "AAA".to_string()]
        );
    }

    #[test]
    fn pump_flag_dropping_does_not_rearm() {
        let mut tracker = PumpTracker::new();
        tracker.detect(&[record("ABC", true)]);
        tracker.detect(&[record("ABC", false)]);
        assert!(tracker.detect(&[record("ABC", true)]).is_empty());
    }
}
