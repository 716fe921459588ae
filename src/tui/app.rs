//! Application state for the TUI.

use std::time::{Duration, Instant};

use ratatui::layout::Rect;
use ratatui::widgets::TableState;

use crate::alerts::PumpTracker;
use crate::models::{Summary, TickerRecord};

/// How long a transient error note stays in the status bar.
const ERROR_DISPLAY_TTL: Duration = Duration::from_secs(5);

/// Central application state container.
///
/// Owned and mutated exclusively by the run loop; background tasks only
/// send messages. Each applied snapshot fully replaces `records` and
/// `summary` — nothing is merged with prior state.
pub struct App {
    /// Rows of the latest applied snapshot, in the order received.
    pub records: Vec<TickerRecord>,
    /// Counters over the latest applied snapshot.
    pub summary: Summary,
    /// Table selection and scroll offset.
    pub table_state: TableState,
    /// Detail overlay, pinned to the record it was opened for.
    pub detail: Option<DetailView>,
    /// Outcome of the most recent fetch cycle.
    pub fetch_status: FetchStatus,
    /// Transient error note (clears after a timeout).
    pub error_message: Option<ErrorDisplay>,
    /// Once-per-ticker pump alert memory.
    pub pumps: PumpTracker,
    /// Terminal area of the last rendered frame, for mouse hit-testing.
    pub viewport: Rect,
    /// Flag to signal the application should quit.
    pub should_quit: bool,

    /// Generation of the last accepted poller message.
    last_generation: u64,
}

impl App {
    /// Creates a new App instance with default state.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            summary: Summary::default(),
            table_state: TableState::default(),
            detail: None,
            fetch_status: FetchStatus::Waiting,
            error_message: None,
            pumps: PumpTracker::new(),
            viewport: Rect::new(0, 0, 80, 24),
            should_quit: false,
            last_generation: 0,
        }
    }

    /// Replaces the displayed snapshot with a newer one.
    ///
    /// A message whose generation is not strictly greater than the last
    /// accepted one is discarded, so a delayed fetch can never overwrite a
    /// newer render. On acceptance the rows are fully replaced, the summary
    /// is recomputed from scratch, and the selection follows the previously
    /// selected ticker where it still exists (clamped otherwise). An open
    /// detail overlay is left untouched.
    ///
    /// Returns the tickers that became pumps for the first time.
    pub fn apply_snapshot(&mut self, generation: u64, records: Vec<TickerRecord>) -> Vec<String> {
        if generation <= self.last_generation {
            return Vec::new();
        }
        self.last_generation = generation;

        let selected_ticker = self
            .table_state
            .selected()
            .and_then(|i| self.records.get(i))
            .map(|r| r.ticker.clone());

        self.summary = Summary::of(&records);
        self.records = records;
        self.fetch_status = FetchStatus::Live { at: Instant::now() };

        self.restore_selection(selected_ticker);
        self.pumps.detect(&self.records)
    }

    /// Records a failed fetch cycle.
    ///
    /// Rows, counters, selection, and the detail overlay are all left
    /// unchanged — the previous successful render stays visible. Only the
    /// fetch status and the transient error note are updated. Stale
    /// generations are discarded like in [`App::apply_snapshot`].
    pub fn record_failure(&mut self, generation: u64, error: String) {
        if generation <= self.last_generation {
            return;
        }
        self.last_generation = generation;

        self.fetch_status = FetchStatus::Failed { at: Instant::now() };
        self.show_error(error);
    }

    /// Re-selects the previously selected ticker, or clamps the index.
    fn restore_selection(&mut self, selected_ticker: Option<String>) {
        if self.records.is_empty() {
            self.table_state.select(None);
            return;
        }

        let index = selected_ticker
            .and_then(|ticker| self.records.iter().position(|r| r.ticker == ticker))
            .or_else(|| self.table_state.selected())
            .unwrap_or(0)
            .min(self.records.len() - 1);
        self.table_state.select(Some(index));
    }

    /// Moves the selection down one row.
    pub fn select_next(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) => (i + 1).min(self.records.len() - 1),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    /// Moves the selection up one row.
    pub fn select_previous(&mut self) {
        if self.records.is_empty() {
            return;
        }
        let previous = match self.table_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(previous));
    }

    /// The currently selected record, if any.
    pub fn selected_record(&self) -> Option<&TickerRecord> {
        self.table_state.selected().and_then(|i| self.records.get(i))
    }

    /// Opens the detail overlay for the currently selected record.
    pub fn open_detail(&mut self) {
        if let Some(index) = self.table_state.selected() {
            self.open_detail_at(index);
        }
    }

    /// Opens the detail overlay for the record at `index`.
    ///
    /// The overlay is a single shared surface: opening it replaces any
    /// previous content. The record is cloned so a snapshot arriving while
    /// the overlay is open changes the table but not the overlay.
    pub fn open_detail_at(&mut self, index: usize) {
        if let Some(record) = self.records.get(index) {
            self.table_state.select(Some(index));
            self.detail = Some(DetailView::new(record.clone()));
        }
    }

    /// Dismisses the detail overlay.
    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    /// Sets a transient error note.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(ErrorDisplay {
            message: message.into(),
            timestamp: Instant::now(),
        });
    }

    /// Clears error notes older than the display TTL.
    pub fn clear_stale_errors(&mut self) {
        if let Some(ref error) = self.error_message
            && error.timestamp.elapsed() > ERROR_DISPLAY_TTL
        {
            self.error_message = None;
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of the most recent fetch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchStatus {
    /// No fetch has completed yet.
    Waiting,
    /// The last fetch succeeded.
    Live { at: Instant },
    /// The last fetch failed; the previous render stays visible.
    Failed { at: Instant },
}

impl FetchStatus {
    /// Returns a display string for the status.
    pub fn label(&self) -> &'static str {
        match self {
            FetchStatus::Waiting => "Waiting",
            FetchStatus::Live { .. } => "Live",
            FetchStatus::Failed { .. } => "Stale",
        }
    }
}

/// Content of the detail overlay.
///
/// Pins the full record as it was when the overlay was opened, together
/// with its pretty-printed JSON form (wire field names).
#[derive(Clone, Debug)]
pub struct DetailView {
    /// The record the overlay was opened for.
    pub record: TickerRecord,
    /// Pretty-printed JSON dump of every field.
    pub json: String,
}

impl DetailView {
    fn new(record: TickerRecord) -> Self {
        let json = serde_json::to_string_pretty(&record)
            .unwrap_or_else(|_| format!("{record:#?}"));
        Self { record, json }
    }
}

/// Error note with timestamp for auto-clear.
#[derive(Clone, Debug)]
pub struct ErrorDisplay {
    /// The error message.
    pub message: String,
    /// When the error was shown.
    pub timestamp: Instant,
}
