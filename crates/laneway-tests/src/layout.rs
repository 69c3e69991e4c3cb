//! Integration tests for timeline layout.
//!
//! Exercises lane assignment, window computation, pixel geometry, and the
//! calendar grid together over a realistic project plan.

use chrono::NaiveDate;
use laneway_core::{DaySpan, Zoom};
use laneway_timeline::{
    assign_lanes, date_window_at, item_geometry, month_lines, month_segments, week_marks,
    weekend_bands, Lane, TimelineItem, WindowOptions, MIN_ITEM_DAYS,
};

// ── Helpers ────────────────────────────────────────────────────

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn item(id: u64, name: &str, start: &str, end: &str) -> TimelineItem {
    TimelineItem::from_iso(id, name, start, end).unwrap()
}

fn project_plan() -> Vec<TimelineItem> {
    vec![
        item(1, "Recruit testers", "2024-01-02", "2024-01-09"),
        item(2, "Draft screener", "2024-01-04", "2024-01-05"),
        item(3, "Pilot interviews", "2024-01-11", "2024-01-16"),
        item(4, "Field study", "2024-01-18", "2024-02-02"),
        item(5, "Synthesis", "2024-02-05", "2024-02-12"),
        item(6, "Report draft", "2024-02-08", "2024-02-08"),
        item(7, "Stakeholder review", "2024-02-14", "2024-02-16"),
        item(8, "Final readout", "2024-02-20", "2024-02-20"),
    ]
}

fn lane_ids(lanes: &[Lane<'_>]) -> Vec<Vec<u64>> {
    lanes
        .iter()
        .map(|lane| lane.items.iter().map(|item| item.id).collect())
        .collect()
}

// ── Lane packing over the plan ─────────────────────────────────

#[test]
fn plan_packs_into_two_lanes() {
    let plan = project_plan();
    let lanes = assign_lanes(&plan);
    assert_eq!(lane_ids(&lanes), vec![vec![1, 3, 4, 5, 7, 8], vec![2, 6]]);
}

#[test]
fn every_plan_item_is_laid_out_once() {
    let plan = project_plan();
    let lanes = assign_lanes(&plan);
    let mut ids: Vec<u64> = lanes
        .iter()
        .flat_map(|lane| lane.items.iter().map(|item| item.id))
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
}

// ── Window over the plan ───────────────────────────────────────

#[test]
fn plan_window_pads_the_extent() {
    let plan = project_plan();
    let window = date_window_at(&plan, &WindowOptions::default(), d(2024, 1, 1));
    assert_eq!(window, DaySpan::new(d(2023, 12, 26), d(2024, 2, 27)));
    assert_eq!(window.day_count(), 64);
}

#[test]
fn empty_plan_window_anchors_at_the_reference_date() {
    let window = date_window_at(&[], &WindowOptions::default(), d(2024, 5, 1));
    assert_eq!(window.start, d(2024, 5, 1));
    assert_eq!(window.day_count(), 30);
}

// ── Geometry against the window ────────────────────────────────

#[test]
fn geometry_places_items_inside_the_window() {
    let plan = project_plan();
    let window = date_window_at(&plan, &WindowOptions::default(), d(2024, 1, 1));
    let day_width = Zoom::default().day_width();
    let window_width = window.day_count() as f32 * day_width;

    for item in &plan {
        let geo = item_geometry(item, window.start, day_width);
        assert!(geo.left >= 0.0, "item {} starts before the window", item.id);
        assert!(
            geo.left + geo.width <= window_width,
            "item {} overflows the window",
            item.id
        );
    }
}

#[test]
fn one_day_items_get_the_minimum_width() {
    let plan = project_plan();
    let window = date_window_at(&plan, &WindowOptions::default(), d(2024, 1, 1));
    let day_width = Zoom::default().day_width();

    let readout = &plan[7];
    assert_eq!(readout.duration_days(), 1);
    let geo = item_geometry(readout, window.start, day_width);
    assert_eq!(geo.width, MIN_ITEM_DAYS as f32 * day_width);
}

// ── Grid coherence ─────────────────────────────────────────────

#[test]
fn grid_covers_the_window() {
    let plan = project_plan();
    let window = date_window_at(&plan, &WindowOptions::default(), d(2024, 1, 1));
    let day_width = Zoom::default().day_width();
    let window_width = window.day_count() as f32 * day_width;

    let segments = month_segments(window, day_width);
    let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["December 2023", "January 2024", "February 2024"]);

    // Segment widths tile the window exactly (none is clamped here).
    let total: f32 = segments.iter().map(|s| s.width).sum();
    assert_eq!(total, window_width);

    let lines = month_lines(window, day_width);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].left, 6.0 * day_width); // Jan 1
    assert_eq!(lines[1].left, 37.0 * day_width); // Feb 1

    for band in weekend_bands(window, day_width) {
        assert!(band.left >= 0.0);
        assert!(band.left + band.width <= window_width);
    }
}

#[test]
fn week_marks_step_by_seven_days() {
    let plan = project_plan();
    let window = date_window_at(&plan, &WindowOptions::default(), d(2024, 1, 1));
    let day_width = Zoom::default().day_width();

    let marks = week_marks(window, day_width);
    assert!(marks.len() > 8);
    for pair in marks.windows(2) {
        assert_eq!(pair[1].left - pair[0].left, 7.0 * day_width);
    }
}

// ── Serde round trip into layout ───────────────────────────────

#[test]
fn plan_loaded_from_json_lays_out_identically() {
    let plan = project_plan();
    let json = serde_json::to_string(&plan).unwrap();
    let loaded: Vec<TimelineItem> = serde_json::from_str(&json).unwrap();

    assert_eq!(loaded, plan);
    assert_eq!(lane_ids(&assign_lanes(&loaded)), lane_ids(&assign_lanes(&plan)));
}
