// src/errors.rs
use thiserror::Error;

/// Errors originating from the scrape pipeline: the HTTP session layer,
/// the file cache, and the workflow's validation steps.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Connection failures, timeouts, and non-2xx statuses. The only kind
    /// the retry policy treats as transient.
    #[error("network error: {0}")]
    Network(String),

    /// A table is missing columns the caller declared required.
    #[error("missing required columns: {0:?}")]
    MissingColumns(Vec<String>),

    /// A source rejected the raw payload it fetched.
    #[error("parse error: {0}")]
    Parse(String),

    /// A row was pushed with the wrong number of cells.
    #[error("row width {got} does not match table width {want}")]
    RowWidth { want: usize, got: usize },

    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache format error: {0}")]
    Csv(#[from] csv::Error),
}

impl ScrapeError {
    /// Whether the retry policy should try again after this failure.
    /// Schema and parse failures never are; retrying cannot fix them.
    pub fn is_transient(&self) -> bool {
        matches!(self, ScrapeError::Network(_))
    }
}
