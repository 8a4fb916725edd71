//! Pixel window covering a polygon's bounding box
//!
//! The window is the rectangular grid area the rasterizer reads before
//! masking. Coordinates are signed: a polygon outside the raster extent
//! snaps to a window with negative or oversized indices, and that window
//! must propagate unchanged so the read itself is what fails.

use crate::coordinate::{BoundingBox, GridTransform};

/// A snapped pixel window (top-left corner plus dimensions)
#[derive(Debug, Clone, Copy)]
pub struct SliceWindow {
    /// X-coordinate of the top-left cell, may be negative
    pub x: i64,
    /// Y-coordinate of the top-left cell, may be negative
    pub y: i64,
    /// Width of the window in cells
    pub width: usize,
    /// Height of the window in cells
    pub height: usize,
}

impl SliceWindow {
    /// Snap a bounding box to the raster grid
    ///
    /// The top-left corner is (max lat, min lon) and the bottom-right
    /// corner is (min lat, max lon), consistent with north-up row order.
    /// Dimensions take the absolute difference of the snapped corners,
    /// which guards against sign inversion from a negative pixel height.
    pub fn from_bbox(grid: &GridTransform, bbox: &BoundingBox) -> Self {
        let (top_left_x, top_left_y) = grid.snap_to_grid(bbox.max_lat, bbox.min_lon);
        let (bottom_right_x, bottom_right_y) = grid.snap_to_grid(bbox.min_lat, bbox.max_lon);
        SliceWindow {
            x: top_left_x,
            y: top_left_y,
            width: (top_left_x - bottom_right_x).unsigned_abs() as usize,
            height: (top_left_y - bottom_right_y).unsigned_abs() as usize,
        }
    }

    /// True when the window covers no cells
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
