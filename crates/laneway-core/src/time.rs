//! Calendar spans for day-granular scheduling.
//!
//! Timeline items live on whole calendar days, so all spans here are
//! inclusive on both ends: a span from Jan 1 to Jan 1 covers one day.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaySpan {
    /// First day (inclusive)
    pub start: NaiveDate,
    /// Last day (inclusive)
    pub end: NaiveDate,
}

impl DaySpan {
    /// Create a new span from first and last day.
    #[inline]
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Create a span covering a single day.
    #[inline]
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Number of days covered, counting both endpoints.
    #[inline]
    pub fn day_count(self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Check if a day falls within this span.
    #[inline]
    pub fn contains(self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }

    /// Check if two spans share at least one day.
    pub fn overlaps(self, other: Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Compute the days common to both spans, if any.
    pub fn intersection(self, other: Self) -> Option<Self> {
        if !self.overlaps(other) {
            return None;
        }
        Some(Self {
            start: self.start.max(other.start),
            end: self.end.min(other.end),
        })
    }

    /// Shift both endpoints by a signed number of days.
    pub fn shift(self, days: i64) -> Self {
        Self {
            start: shift_date(self.start, days),
            end: shift_date(self.end, days),
        }
    }

    /// Widen the span by `days` on each side.
    pub fn padded(self, days: i64) -> Self {
        Self {
            start: shift_date(self.start, -days),
            end: shift_date(self.end, days),
        }
    }

    /// Iterate over every day in the span, in order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.day_count().max(0) as usize)
    }
}

impl fmt::Display for DaySpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Shift a date by a signed number of days.
///
/// Returns the date unchanged when the shift would leave the representable
/// calendar range, keeping callers total.
pub fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    let shifted = if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    };
    shifted.unwrap_or(date)
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|first_of_next| first_of_next.pred_opt())
        .unwrap_or(date)
}

/// The Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    shift_date(date, -i64::from(date.weekday().num_days_from_sunday()))
}

/// Check if a date falls on a Saturday or Sunday.
#[inline]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
