//! Document-space coordinate helpers.
//!
//! Browser state is captured into a [`Viewport`] snapshot by the frontend so
//! that everything here stays pure and host-testable.

use glam::DVec2;

/// A point in document space: viewport offset plus the current scroll offset.
pub type Coordinate = DVec2;

/// Window size and scroll offsets at one instant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    #[inline]
    pub fn scroll(&self) -> DVec2 {
        DVec2::new(self.scroll_x, self.scroll_y)
    }
}

/// Geometric center of the visible viewport, in document space.
#[inline]
pub fn viewport_center(viewport: &Viewport) -> Coordinate {
    DVec2::new(viewport.width / 2.0, viewport.height / 2.0) + viewport.scroll()
}

/// Top-left corner of an element whose bounding box starts at
/// (`rect_left`, `rect_top`) in viewport space.
#[inline]
pub fn element_coordinate(rect_left: f64, rect_top: f64, viewport: &Viewport) -> Coordinate {
    DVec2::new(rect_left, rect_top) + viewport.scroll()
}
