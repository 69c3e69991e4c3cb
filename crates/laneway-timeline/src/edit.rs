//! Edit operations on the timeline.
//!
//! Every user-visible mutation is a `TimelineEdit` value applied through
//! [`TimelineState::apply`](crate::state::TimelineState::apply). Invalid
//! edits (unknown id, a date crossing its partner) leave the state
//! unchanged rather than erroring, so callers can feed raw interaction
//! results straight through.

use chrono::NaiveDate;
use laneway_core::Zoom;

/// A single edit to the timeline state.
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineEdit {
    /// Rename an item. The name is trimmed; an empty result is ignored.
    Rename { id: u64, name: String },
    /// Move an item's start date. Ignored if it would pass the end date.
    MoveStart { id: u64, to: NaiveDate },
    /// Move an item's end date. Ignored if it would pass the start date.
    MoveEnd { id: u64, to: NaiveDate },
    /// Set the zoom level.
    SetZoom { zoom: Zoom },
}
