//! Crate-level error types.
//!
//! [`MinskyError`] unifies every error source (configuration, HTTP, JSON,
//! terminal) behind a single enum so callers can match on the variant they
//! care about while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MinskyError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum MinskyError {
    /// An environment variable was missing, inconsistent, or unparseable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The watchlist endpoint was unreachable or returned a non-success
    /// status. The response body is not interpreted in either case.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response body could not be deserialized as a watchlist snapshot.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Terminal setup or teardown failed.
    #[error("terminal error: {0}")]
    Terminal(String),
}
