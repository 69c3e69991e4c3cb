//! Visible date window computation.
//!
//! The window is the span of days the timeline view covers: the extent of
//! all items plus breathing room, or a today-anchored default when there
//! is nothing to show.

use chrono::{Local, Months, NaiveDate};
use laneway_core::{end_of_month, shift_date, DaySpan};
use serde::{Deserialize, Serialize};

use crate::item::TimelineItem;

/// Days shown when there are no items.
pub const EMPTY_WINDOW_DAYS: i64 = 30;

/// Options controlling the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowOptions {
    /// Days of padding added on each side of the items' extent.
    pub padding_days: i64,
    /// Extend the window end to the last day of the month one month out,
    /// leaving room to drag items toward the future.
    pub extend_to_month_boundary: bool,
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            padding_days: 7,
            extend_to_month_boundary: false,
        }
    }
}

/// Compute the visible window for a set of items, anchored at today when
/// the set is empty.
pub fn date_window(items: &[TimelineItem], options: &WindowOptions) -> DaySpan {
    date_window_at(items, options, Local::now().date_naive())
}

/// Compute the visible window against an explicit reference date.
pub fn date_window_at(
    items: &[TimelineItem],
    options: &WindowOptions,
    today: NaiveDate,
) -> DaySpan {
    let span = match items_extent(items) {
        Some((min, max)) => DaySpan::new(min, max).padded(options.padding_days),
        None => DaySpan::new(today, shift_date(today, EMPTY_WINDOW_DAYS - 1)),
    };
    if options.extend_to_month_boundary {
        let end = span
            .end
            .checked_add_months(Months::new(1))
            .map(end_of_month)
            .unwrap_or(span.end);
        DaySpan::new(span.start, end)
    } else {
        span
    }
}

/// Earliest and latest dates across all item endpoints.
fn items_extent(items: &[TimelineItem]) -> Option<(NaiveDate, NaiveDate)> {
    let mut dates = items.iter().flat_map(|item| [item.start, item.end]);
    let first = dates.next()?;
    Some(dates.fold((first, first), |(min, max), date| {
        (min.min(date), max.max(date))
    }))
}
