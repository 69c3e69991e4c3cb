//! Zoom scale for the timeline view.
//!
//! Zoom is a clamped multiplier over a base pixels-per-day width. View
//! policies that depend on the scale (whether the week row or weekend
//! shading is worth drawing) live here so every consumer agrees on them.

use serde::{Deserialize, Serialize};

/// Clamped timeline zoom factor.
///
/// Construction goes through [`Zoom::new`], so a `Zoom` always holds a
/// factor within `[MIN, MAX]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct Zoom(f32);

impl Zoom {
    /// Most zoomed-out factor.
    pub const MIN: Self = Self(0.5);

    /// Most zoomed-in factor.
    pub const MAX: Self = Self(4.0);

    /// Increment used by zoom in/out controls.
    pub const STEP: f32 = 0.25;

    /// Pixels per day at factor 1.0.
    pub const BASE_DAY_WIDTH: f32 = 24.0;

    /// Create a zoom, clamping the factor into `[MIN, MAX]`.
    #[inline]
    pub fn new(factor: f32) -> Self {
        Self(factor.clamp(Self::MIN.0, Self::MAX.0))
    }

    /// The raw zoom factor.
    #[inline]
    pub fn factor(self) -> f32 {
        self.0
    }

    /// Width of one day in pixels at this zoom.
    #[inline]
    pub fn day_width(self) -> f32 {
        Self::BASE_DAY_WIDTH * self.0
    }

    /// One step zoomed in, saturating at [`Zoom::MAX`].
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + Self::STEP)
    }

    /// One step zoomed out, saturating at [`Zoom::MIN`].
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - Self::STEP)
    }

    /// The factor as a whole percentage, for control readouts.
    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }

    /// Whether there is room to label individual weeks.
    #[inline]
    pub fn shows_week_row(self) -> bool {
        self.0 >= 1.0
    }

    /// Whether weekend shading is visible enough to draw.
    #[inline]
    pub fn highlights_weekends(self) -> bool {
        self.0 >= 1.5
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(1.0)
    }
}

impl From<f32> for Zoom {
    fn from(factor: f32) -> Self {
        Self::new(factor)
    }
}

impl From<Zoom> for f32 {
    fn from(zoom: Zoom) -> f32 {
        zoom.0
    }
}
