//! Affine grid transform between geographic and pixel coordinates
//!
//! Wraps the six GDAL geotransform coefficients and provides the two
//! mappings the rasterizer needs: snapping a lat/lon to its nearest
//! grid cell, and recovering the cell-center lat/lon of a grid cell.
//! A north-up raster is assumed; the rotation terms are carried but
//! never applied.

use gdal::Dataset;

use crate::slicer::errors::SliceResult;

/// Affine transform of a north-up raster grid
///
/// The coefficients follow GDAL's ordering: origin x, pixel width,
/// row rotation, origin y, column rotation, pixel height. Pixel height
/// is typically negative (rows grow southward).
#[derive(Debug, Clone, Copy)]
pub struct GridTransform {
    /// X-coordinate (longitude) of the raster's top-left corner
    pub top_left_x: f64,
    /// Width of a pixel in geographic units
    pub pixel_width: f64,
    /// Row rotation, ignored (north-up assumption)
    pub rotation_x: f64,
    /// Y-coordinate (latitude) of the raster's top-left corner
    pub top_left_y: f64,
    /// Column rotation, ignored (north-up assumption)
    pub rotation_y: f64,
    /// Height of a pixel, typically negative
    pub pixel_height: f64,
}

/// Round to the nearest integer, halves resolving downward.
///
/// The half-down rule keeps a cell center inside its own cell: the
/// forward transform of a center lands exactly on index + 0.5, and
/// that half must not spill into the next cell.
fn round_nearest(value: f64) -> i64 {
    (value - 0.5).ceil() as i64
}

impl GridTransform {
    /// Create a transform from the six GDAL geotransform coefficients
    pub fn new(coefficients: [f64; 6]) -> Self {
        GridTransform {
            top_left_x: coefficients[0],
            pixel_width: coefficients[1],
            rotation_x: coefficients[2],
            top_left_y: coefficients[3],
            rotation_y: coefficients[4],
            pixel_height: coefficients[5],
        }
    }

    /// Read the geotransform from an opened raster dataset
    pub fn from_dataset(dataset: &Dataset) -> SliceResult<Self> {
        Ok(GridTransform::new(dataset.geo_transform()?))
    }

    /// Snap a lat/lon to the nearest grid cell (x, y)
    ///
    /// No bounds checking: coordinates outside the raster extent yield
    /// negative or oversized indices, which callers must propagate.
    pub fn snap_to_grid(&self, lat: f64, lon: f64) -> (i64, i64) {
        let x = (lon - self.top_left_x) / self.pixel_width;
        let y = (lat - self.top_left_y) / self.pixel_height;
        (round_nearest(x), round_nearest(y))
    }

    /// Lat/lon of the center of grid cell (x, y)
    ///
    /// The 0.5 offset is deliberate: polygon containment is decided at
    /// the pixel center, not the corner. Composing with `snap_to_grid`
    /// is the identity on integer indices, but the reverse composition
    /// is not an exact inversion (nearest-cell snapping loses precision).
    pub fn cell_center(&self, x: i64, y: i64) -> (f64, f64) {
        let lon = self.top_left_x + self.pixel_width * (x as f64 + 0.5);
        let lat = self.top_left_y + self.pixel_height * (y as f64 + 0.5);
        (lat, lon)
    }
}
