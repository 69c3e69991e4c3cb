//! Error types for Laneway.

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for Laneway operations.
#[derive(Error, Debug)]
pub enum LanewayError {
    #[error("Invalid date span: start {start} is after end {end}")]
    InvalidDateSpan { start: NaiveDate, end: NaiveDate },

    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),
}

/// Result type alias for Laneway operations.
pub type Result<T> = std::result::Result<T, LanewayError>;
