//! Shared test utilities and builders.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use minsky::models::TickerRecord;

/// Builds a record with the given ticker, score, and pump flag; every other
/// field carries a realistic fixed value.
pub fn record(ticker: &str, score: Decimal, is_pump: bool) -> TickerRecord {
    TickerRecord {
        ticker: ticker.to_string(),
        price: dec!(12.47),
        change_percent: dec!(3.8),
        volume_ratio: dec!(2.15),
        rsi: dec!(67.3),
        ema_signal: "bullish".to_string(),
        score,
        is_pump,
        last_update: "2024-05-01 14:30:05".to_string(),
    }
}

/// A realistic three-record snapshot body as served by `/watchlist/live`.
pub fn snapshot_json() -> &'static str {
    r#"[
        {
            "ticker": "ABC",
            "price": 4.21,
            "changePercent": 12.5,
            "volumeRatio": 3.4,
            "rsi": 68.2,
            "emaSignal": "bullish",
            "score": 85,
            "isPump": true,
            "lastUpdate": "2024-05-01 14:30:05"
        },
        {
            "ticker": "XYZ",
            "price": 130.02,
            "changePercent": -0.8,
            "volumeRatio": 0.9,
            "rsi": 41.0,
            "emaSignal": "bearish",
            "score": 62.5,
            "isPump": false,
            "lastUpdate": "2024-05-01 14:30:02"
        },
        {
            "ticker": "QQQ",
            "price": 0.034,
            "changePercent": 1.1,
            "volumeRatio": 1.0,
            "rsi": 50.5,
            "emaSignal": "",
            "score": 12,
            "isPump": false,
            "lastUpdate": "2024-05-01 14:29:58"
        }
    ]"#
}
