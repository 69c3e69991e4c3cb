//! Caller-owned timeline state.
//!
//! There is no store or interior mutability: the state is a plain value
//! the embedding application owns, and applying an edit returns the
//! updated state while the original stays untouched. Cloning is cheap
//! enough at timeline scale that rendering the old state while the new
//! one is built is perfectly fine.

use laneway_core::{DaySpan, Zoom};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::edit::TimelineEdit;
use crate::item::TimelineItem;
use crate::lane::{assign_lanes, Lane};
use crate::window::{date_window, WindowOptions};

/// The complete interactive state of a timeline.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimelineState {
    /// Items in insertion order.
    pub items: Vec<TimelineItem>,
    /// Current zoom level.
    pub zoom: Zoom,
}

impl TimelineState {
    /// Create a state holding `items` at the default zoom.
    pub fn with_items(items: Vec<TimelineItem>) -> Self {
        Self {
            items,
            zoom: Zoom::default(),
        }
    }

    /// Apply an edit, returning the updated state.
    #[must_use]
    pub fn apply(&self, edit: &TimelineEdit) -> Self {
        let mut next = self.clone();
        match edit {
            TimelineEdit::Rename { id, name } => {
                let trimmed = name.trim();
                if trimmed.is_empty() {
                    trace!(id, "ignoring rename to empty name");
                } else if let Some(item) = next.item_mut(*id) {
                    debug!(id, name = trimmed, "renaming item");
                    item.name = trimmed.to_string();
                }
            }
            TimelineEdit::MoveStart { id, to } => {
                if let Some(item) = next.item_mut(*id) {
                    if *to <= item.end {
                        debug!(id, %to, "moving item start");
                        item.start = *to;
                    } else {
                        trace!(id, %to, "ignoring start moving past the end");
                    }
                }
            }
            TimelineEdit::MoveEnd { id, to } => {
                if let Some(item) = next.item_mut(*id) {
                    if *to >= item.start {
                        debug!(id, %to, "moving item end");
                        item.end = *to;
                    } else {
                        trace!(id, %to, "ignoring end moving before the start");
                    }
                }
            }
            TimelineEdit::SetZoom { zoom } => {
                debug!(factor = zoom.factor(), "setting zoom");
                next.zoom = *zoom;
            }
        }
        next
    }

    /// Look up an item by id.
    pub fn item(&self, id: u64) -> Option<&TimelineItem> {
        self.items.iter().find(|item| item.id == id)
    }

    fn item_mut(&mut self, id: u64) -> Option<&mut TimelineItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    /// Lanes for the current items.
    pub fn lanes(&self) -> Vec<Lane<'_>> {
        assign_lanes(&self.items)
    }

    /// Visible window for the current items.
    pub fn window(&self, options: &WindowOptions) -> DaySpan {
        date_window(&self.items, options)
    }

    /// Current width of one day, in pixels.
    #[inline]
    pub fn day_width(&self) -> f32 {
        self.zoom.day_width()
    }
}
