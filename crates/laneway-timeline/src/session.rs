//! Drag-to-resize interaction sessions.
//!
//! A resize is an explicit short-lived value rather than hidden handler
//! state: begin it on pointer-down over an item edge, feed it pointer
//! positions while the drag lasts, then turn it into a single edit on
//! release. Dropping the session abandons the drag with nothing applied.

use chrono::NaiveDate;
use laneway_core::{shift_date, DaySpan};
use tracing::{debug, trace};

use crate::edit::TimelineEdit;
use crate::item::TimelineItem;

/// Which edge of an item a resize grabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeEdge {
    Start,
    End,
}

/// An in-progress edge drag.
///
/// The session snapshots the item's span and the pointer origin when the
/// drag begins; the live delta is always recomputed from the original
/// values, so intermediate updates never accumulate rounding error.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeSession {
    item_id: u64,
    edge: ResizeEdge,
    origin: DaySpan,
    origin_x: f32,
    delta_days: i64,
}

impl ResizeSession {
    /// Begin a drag on one edge of an item, recording the pointer origin.
    pub fn begin(item: &TimelineItem, edge: ResizeEdge, pointer_x: f32) -> Self {
        debug!(id = item.id, ?edge, "beginning resize");
        Self {
            item_id: item.id,
            edge,
            origin: item.span(),
            origin_x: pointer_x,
            delta_days: 0,
        }
    }

    /// Update the live delta from the current pointer position.
    pub fn update(&mut self, pointer_x: f32, day_width: f32) {
        self.delta_days = drag_days(pointer_x - self.origin_x, day_width);
    }

    /// The item being resized.
    #[inline]
    pub fn item_id(&self) -> u64 {
        self.item_id
    }

    /// The edge being dragged.
    #[inline]
    pub fn edge(&self) -> ResizeEdge {
        self.edge
    }

    /// Whole days the pointer has moved since the drag began.
    #[inline]
    pub fn delta_days(&self) -> i64 {
        self.delta_days
    }

    /// The edge date that stays fixed during the drag.
    pub fn anchor(&self) -> NaiveDate {
        match self.edge {
            ResizeEdge::Start => self.origin.end,
            ResizeEdge::End => self.origin.start,
        }
    }

    /// Where the dragged edge would land, before clamping.
    pub fn target(&self) -> NaiveDate {
        let from = match self.edge {
            ResizeEdge::Start => self.origin.start,
            ResizeEdge::End => self.origin.end,
        };
        shift_date(from, self.delta_days)
    }

    /// The span the item would occupy if committed now.
    ///
    /// The dragged edge is clamped at the anchor, so the preview never
    /// inverts; the span may collapse to a single day.
    pub fn preview(&self) -> DaySpan {
        let target = self.target();
        match self.edge {
            ResizeEdge::Start => DaySpan::new(target.min(self.origin.end), self.origin.end),
            ResizeEdge::End => DaySpan::new(self.origin.start, target.max(self.origin.start)),
        }
    }

    /// The edit this drag amounts to, or `None` when the clamped target
    /// equals the edge's original date.
    pub fn edit(&self) -> Option<TimelineEdit> {
        let preview = self.preview();
        let edit = match self.edge {
            ResizeEdge::Start if preview.start != self.origin.start => TimelineEdit::MoveStart {
                id: self.item_id,
                to: preview.start,
            },
            ResizeEdge::End if preview.end != self.origin.end => TimelineEdit::MoveEnd {
                id: self.item_id,
                to: preview.end,
            },
            _ => {
                trace!(id = self.item_id, "resize ended where it began");
                return None;
            }
        };
        debug!(id = self.item_id, ?edit, "committing resize");
        Some(edit)
    }
}

/// Convert pointer travel in pixels to whole days.
pub fn drag_days(delta_x: f32, day_width: f32) -> i64 {
    if day_width <= 0.0 {
        return 0;
    }
    (delta_x / day_width).round() as i64
}
