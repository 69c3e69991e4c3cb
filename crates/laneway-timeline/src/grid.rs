//! Calendar grid view model.
//!
//! Headless building blocks for a month/week header and day grid:
//! - Month segments with labels, clamped to the visible window
//! - Vertical lines at month boundaries
//! - Week marks at each Sunday
//! - Shaded weekend bands
//!
//! All positions are in pixels relative to the window's left edge. Whether
//! a renderer draws weeks or weekends at the current scale is decided by
//! [`Zoom`](laneway_core::Zoom), not here.

use chrono::{Days, NaiveDate};
use laneway_core::{end_of_month, is_weekend, start_of_month, start_of_week, DaySpan};
use serde::{Deserialize, Serialize};

/// Minimum pixel width of a month segment, keeping its label readable.
pub const MIN_MONTH_LABEL_WIDTH: f32 = 80.0;

/// A month's visible slice of the header.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthSegment {
    /// Label, e.g. "January 2024".
    pub label: String,
    /// Pixel offset of the visible slice.
    pub left: f32,
    /// Pixel width of the visible slice, floored at
    /// [`MIN_MONTH_LABEL_WIDTH`].
    pub width: f32,
}

/// A vertical line at a month boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    /// Pixel offset of the line.
    pub left: f32,
}

/// A labeled tick at the start of a week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekMark {
    /// Label, e.g. "Jan 7".
    pub label: String,
    /// Pixel offset; negative for a week that began before the window.
    pub left: f32,
}

/// A shaded band over consecutive weekend days.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekendBand {
    /// Pixel offset of the band.
    pub left: f32,
    /// Pixel width of the band.
    pub width: f32,
}

/// Month segments covering the window, in calendar order.
pub fn month_segments(window: DaySpan, day_width: f32) -> Vec<MonthSegment> {
    let mut segments = Vec::new();
    let mut cursor = start_of_month(window.start);
    while cursor <= window.end {
        let month = DaySpan::new(cursor, end_of_month(cursor));
        if let Some(visible) = month.intersection(window) {
            segments.push(MonthSegment {
                label: cursor.format("%B %Y").to_string(),
                left: (visible.start - window.start).num_days() as f32 * day_width,
                width: (visible.day_count() as f32 * day_width).max(MIN_MONTH_LABEL_WIDTH),
            });
        }
        cursor = match month.end.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    segments
}

/// Vertical lines at first-of-month dates strictly inside the window.
///
/// The window's own left edge never gets a line, even when it falls on the
/// first of a month.
pub fn month_lines(window: DaySpan, day_width: f32) -> Vec<GridLine> {
    let mut lines = Vec::new();
    let mut cursor = start_of_month(window.start);
    while cursor <= window.end {
        let offset = (cursor - window.start).num_days();
        if offset > 0 {
            lines.push(GridLine {
                left: offset as f32 * day_width,
            });
        }
        cursor = match end_of_month(cursor).succ_opt() {
            Some(next) => next,
            None => break,
        };
    }
    lines
}

/// Week marks at each Sunday, beginning with the Sunday on or before the
/// window start.
pub fn week_marks(window: DaySpan, day_width: f32) -> Vec<WeekMark> {
    let mut marks = Vec::new();
    let mut cursor = start_of_week(window.start);
    while cursor <= window.end {
        marks.push(WeekMark {
            label: cursor.format("%b %-d").to_string(),
            left: (cursor - window.start).num_days() as f32 * day_width,
        });
        cursor = match cursor.checked_add_days(Days::new(7)) {
            Some(next) => next,
            None => break,
        };
    }
    marks
}

/// Shaded bands over the window's weekend days, with adjacent days merged
/// into a single band.
pub fn weekend_bands(window: DaySpan, day_width: f32) -> Vec<WeekendBand> {
    let mut runs: Vec<(i64, i64)> = Vec::new();
    for (offset, day) in window.days().enumerate() {
        if !is_weekend(day) {
            continue;
        }
        let offset = offset as i64;
        match runs.last_mut() {
            Some((_, last)) if *last + 1 == offset => *last = offset,
            _ => runs.push((offset, offset)),
        }
    }
    runs.into_iter()
        .map(|(first, last)| WeekendBand {
            left: first as f32 * day_width,
            width: (last - first + 1) as f32 * day_width,
        })
        .collect()
}

/// Long-form date label, e.g. "Jan 5, 2024".
pub fn long_date_label(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Human duration label, e.g. "1 day" or "12 days".
pub fn duration_label(days: i64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{days} days")
    }
}
