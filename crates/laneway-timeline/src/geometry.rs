//! Pixel geometry for timeline items.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::item::TimelineItem;
use crate::lane::MIN_ITEM_DAYS;

/// Horizontal pixel placement of an item within the window.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ItemGeometry {
    /// Offset from the window's left edge, in pixels. Negative when the
    /// item starts before the window.
    pub left: f32,
    /// Rendered width in pixels.
    pub width: f32,
}

/// Compute an item's horizontal placement.
///
/// `left` scales with the day distance from the window start; `width`
/// scales with the inclusive duration, floored at [`MIN_ITEM_DAYS`] worth
/// of pixels to mirror the effective interval used by lane assignment.
pub fn item_geometry(item: &TimelineItem, window_start: NaiveDate, day_width: f32) -> ItemGeometry {
    let offset_days = (item.start - window_start).num_days();
    let duration_days = item.duration_days();
    ItemGeometry {
        left: offset_days as f32 * day_width,
        width: (duration_days as f32 * day_width).max(MIN_ITEM_DAYS as f32 * day_width),
    }
}
