//! Shared models for the watchlist API.
//!
//! Contains the per-record wire type, its derived presentation
//! classifications, and the snapshot-level summary counters.

pub mod ticker;

pub use ticker::{ScoreBand, TickerRecord};

/// The full ordered list of ticker records returned by one fetch.
///
/// A snapshot is received whole and fully replaces the displayed state; the
/// dashboard keeps no memory of the previous one.
pub type Snapshot = Vec<TickerRecord>;

/// Aggregate counters computed over a full snapshot.
///
/// Recomputed from scratch on every applied snapshot; there is no
/// incremental update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Records flagged as pumps.
    pub pumps: usize,
    /// Records with a score of at least 60.
    pub strong_scores: usize,
    /// Total record count.
    pub total: usize,
}

impl Summary {
    /// Computes the three counters over `records`.
    pub fn of(records: &[TickerRecord]) -> Self {
        Self {
            pumps: records.iter().filter(|r| r.is_pump).count(),
            strong_scores: records.iter().filter(|r| r.has_strong_score()).count(),
            total: records.len(),
        }
    }
}
