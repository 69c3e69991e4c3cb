//! Laneway Core - Foundation types for timeline layout
//!
//! This crate provides the fundamental types used throughout Laneway:
//! - Calendar spans (DaySpan) and month/week helpers
//! - Zoom scale and pixel-per-day policy
//! - Error types

pub mod error;
pub mod time;
pub mod zoom;

pub use error::{LanewayError, Result};
pub use time::{end_of_month, is_weekend, shift_date, start_of_month, start_of_week, DaySpan};
pub use zoom::Zoom;
