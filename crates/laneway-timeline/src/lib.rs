//! Laneway Timeline - Gantt-style timeline layout and editing model
//!
//! Implements the data model behind an interactive project timeline:
//! - Items spanning inclusive calendar dates
//! - Greedy first-fit lane assignment with a minimum visual width
//! - Visible window and per-item pixel geometry
//! - Month/week/weekend grid view model
//! - Functional state updates and drag-to-resize sessions

pub mod edit;
pub mod geometry;
pub mod grid;
pub mod item;
pub mod lane;
pub mod session;
pub mod state;
pub mod window;

pub use edit::TimelineEdit;
pub use geometry::{item_geometry, ItemGeometry};
pub use grid::{
    duration_label, long_date_label, month_lines, month_segments, week_marks, weekend_bands,
    GridLine, MonthSegment, WeekMark, WeekendBand, MIN_MONTH_LABEL_WIDTH,
};
pub use item::TimelineItem;
pub use lane::{assign_lanes, effective_end, Lane, MIN_GAP_DAYS, MIN_ITEM_DAYS};
pub use session::{drag_days, ResizeEdge, ResizeSession};
pub use state::TimelineState;
pub use window::{date_window, date_window_at, WindowOptions, EMPTY_WINDOW_DAYS};
