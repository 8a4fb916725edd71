//! Coordinate handling for raster grids
//!
//! This module provides the affine mapping between geographic lat/lon
//! coordinates and raster pixel indices, plus the bounding box type
//! used to delimit polygon extents.

mod bbox;
mod grid;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::grid::GridTransform;
