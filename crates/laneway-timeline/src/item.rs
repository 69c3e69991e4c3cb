//! Item types for the timeline.

use chrono::NaiveDate;
use laneway_core::{DaySpan, LanewayError, Result};
use serde::{Deserialize, Serialize};

/// Date format accepted by [`TimelineItem::from_iso`].
const ISO_DATE: &str = "%Y-%m-%d";

/// An item scheduled on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    /// Unique item ID
    pub id: u64,
    /// Item name (displayed in UI)
    pub name: String,
    /// First scheduled day (inclusive)
    pub start: NaiveDate,
    /// Last scheduled day (inclusive)
    pub end: NaiveDate,
}

impl TimelineItem {
    /// Create a new item, rejecting inverted date ranges.
    pub fn new(
        id: u64,
        name: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self> {
        if start > end {
            return Err(LanewayError::InvalidDateSpan { start, end });
        }
        Ok(Self {
            id,
            name: name.into(),
            start,
            end,
        })
    }

    /// Create an item from ISO `YYYY-MM-DD` date strings.
    pub fn from_iso(id: u64, name: impl Into<String>, start: &str, end: &str) -> Result<Self> {
        let start = NaiveDate::parse_from_str(start, ISO_DATE)?;
        let end = NaiveDate::parse_from_str(end, ISO_DATE)?;
        Self::new(id, name, start, end)
    }

    /// The days this item occupies.
    #[inline]
    pub fn span(&self) -> DaySpan {
        DaySpan::new(self.start, self.end)
    }

    /// Inclusive duration in days.
    #[inline]
    pub fn duration_days(&self) -> i64 {
        self.span().day_count()
    }
}
