//! Live watchlist terminal dashboard library.
//!
//! Provides typed models for the watchlist API, a polling REST client,
//! pump alert tracking, and the Ratatui dashboard that renders snapshots
//! as a table with summary counters and a per-record detail overlay.

pub mod alerts;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod poller;
pub mod tui;

pub use error::{MinskyError, Result};
