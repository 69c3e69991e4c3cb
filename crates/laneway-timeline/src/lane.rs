//! Lane assignment for timeline items.
//!
//! Packs items into horizontal lanes so that no two items in a lane
//! visually collide. Placement is greedy first-fit over items sorted by
//! start date, which keeps the lane count minimal for the effective
//! intervals and the output deterministic for a fixed input order.

use chrono::NaiveDate;
use laneway_core::shift_date;

use crate::item::TimelineItem;

/// Minimum days an item occupies visually, regardless of its real duration.
pub const MIN_ITEM_DAYS: i64 = 3;

/// Clear days required after an item's effective end before the next item
/// in the same lane may start.
pub const MIN_GAP_DAYS: i64 = 1;

/// A horizontal row of non-colliding items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane<'a> {
    /// Items in this lane, ascending by start date.
    pub items: Vec<&'a TimelineItem>,
}

impl<'a> Lane<'a> {
    fn new(item: &'a TimelineItem) -> Self {
        Self { items: vec![item] }
    }

    /// Last day this lane is visually occupied.
    pub fn effective_end(&self) -> Option<NaiveDate> {
        self.items.last().map(|item| effective_end(item))
    }
}

/// The last day an item occupies visually.
///
/// Items shorter than [`MIN_ITEM_DAYS`] render stretched to that minimum,
/// so their effective end lies past their real end date.
pub fn effective_end(item: &TimelineItem) -> NaiveDate {
    if item.duration_days() < MIN_ITEM_DAYS {
        shift_date(item.start, MIN_ITEM_DAYS - 1)
    } else {
        item.end
    }
}

/// Pack items into lanes.
///
/// Items are sorted by start date (ties keep input order) and placed
/// greedily into the first lane with room, or a new lane when none has
/// any. Every input item lands in exactly one lane; the items themselves
/// are only borrowed, never cloned or reordered in the input.
pub fn assign_lanes(items: &[TimelineItem]) -> Vec<Lane<'_>> {
    let mut sorted: Vec<&TimelineItem> = items.iter().collect();
    sorted.sort_by_key(|item| item.start);

    let mut lanes: Vec<Lane<'_>> = Vec::new();
    for item in sorted {
        match lanes.iter_mut().find(|lane| fits(lane, item)) {
            Some(lane) => lane.items.push(item),
            None => lanes.push(Lane::new(item)),
        }
    }
    lanes
}

/// An item fits a lane iff it starts strictly after the lane's effective
/// end plus the required gap. Starting exactly at that boundary is a
/// collision.
fn fits(lane: &Lane<'_>, item: &TimelineItem) -> bool {
    match lane.effective_end() {
        Some(end) => item.start > shift_date(end, MIN_GAP_DAYS),
        None => true,
    }
}
