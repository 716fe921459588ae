//! Watchlist record wire type and derived presentation rules.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Score at or above which a record counts toward the summary counter and
/// renders in the mid band.
const STRONG_SCORE: u32 = 60;

/// Score at or above which a record renders in the high band.
const HIGH_SCORE: u32 = 80;

/// One row's worth of market/indicator data plus the upstream-computed
/// score and pump flag.
///
/// All numeric fields are display-only; the dashboard performs no
/// arithmetic on them beyond the score threshold comparisons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TickerRecord {
    pub ticker: String,
    pub price: Decimal,
    #[serde(rename = "changePercent")]
    pub change_percent: Decimal,
    #[serde(rename = "volumeRatio")]
    pub volume_ratio: Decimal,
    pub rsi: Decimal,
    /// Upstream trend indicator. Exactly `"bullish"` renders bullish;
    /// every other value renders bearish.
    #[serde(rename = "emaSignal")]
    pub ema_signal: String,
    pub score: Decimal,
    #[serde(rename = "isPump")]
    pub is_pump: bool,
    /// Upstream-formatted timestamp, displayed verbatim and never parsed.
    #[serde(rename = "lastUpdate")]
    pub last_update: String,
}

impl TickerRecord {
    /// Whether the EMA signal renders with the bullish style.
    pub fn ema_bullish(&self) -> bool {
        self.ema_signal == "bullish"
    }

    /// Whether the score meets the summary counter threshold.
    pub fn has_strong_score(&self) -> bool {
        self.score >= Decimal::from(STRONG_SCORE)
    }

    /// The score band this record renders in.
    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }
}

/// Presentation band for a record's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    /// Score of 80 or above.
    High,
    /// Score of at least 60 and below 80.
    Mid,
    /// Score below 60.
    Low,
}

impl ScoreBand {
    /// Classifies a score into its band.
    pub fn of(score: Decimal) -> Self {
        if score >= Decimal::from(HIGH_SCORE) {
            ScoreBand::High
        } else if score >= Decimal::from(STRONG_SCORE) {
            ScoreBand::Mid
        } else {
            ScoreBand::Low
        }
    }
}
