//! Rasterizer: masked window extraction for one polygon
//!
//! Snaps the polygon's bounding box to the grid, reads the whole window
//! from the requested band in a single call, then masks every cell whose
//! center falls outside the polygon. Reading the window in one go instead
//! of cell by cell is behaviorally identical to per-cell fetches.

use gdal::Dataset;
use log::debug;
use ndarray::Array2;

use crate::coordinate::GridTransform;
use crate::geometry::FeaturePolygon;
use crate::slicer::errors::{SliceError, SliceResult};
use crate::slicer::masked::MaskedSlice;
use crate::slicer::window::SliceWindow;

/// Extract the masked slice of one raster band covering a polygon
///
/// `band_index` is 1-based. A degenerate polygon (no rings, or a bounding
/// box that collapses to zero cells) yields a zero-sized slice without
/// touching the raster. A window that falls outside the raster's readable
/// extent fails the read and surfaces as a `WindowRead` error naming the
/// offending window.
pub fn slice_band(
    raster: &Dataset,
    grid: &GridTransform,
    polygon: &FeaturePolygon,
    band_index: isize,
) -> SliceResult<MaskedSlice> {
    let Some(bbox) = polygon.bounding_box() else {
        debug!("Polygon has no rings, emitting empty slice");
        return Ok(MaskedSlice::empty(0, 0));
    };

    let window = SliceWindow::from_bbox(grid, &bbox);
    if window.is_empty() {
        debug!("Degenerate bounding box, emitting {}x{} slice", window.height, window.width);
        return Ok(MaskedSlice::empty(window.height, window.width));
    }

    let band = raster.rasterband(band_index)?;
    let buffer = band
        .read_as::<f64>(
            (window.x as isize, window.y as isize),
            (window.width, window.height),
            (window.width, window.height),
            None,
        )
        .map_err(|source| SliceError::WindowRead {
            x: window.x,
            y: window.y,
            width: window.width,
            height: window.height,
            source,
        })?;

    // GDAL buffers are row-major, so (height, width) reshapes cleanly
    let values = Array2::from_shape_vec((window.height, window.width), buffer.data)?;
    let mut slice = MaskedSlice::from_values(values);

    for i in 0..window.height {
        for j in 0..window.width {
            let (lat, lon) = grid.cell_center(window.x + j as i64, window.y + i as i64);
            if !polygon.is_inside(lat, lon) {
                slice.mask_out(i, j);
            }
        }
    }

    debug!(
        "Sliced band {}: {}x{} window at ({}, {}), {} valid cells",
        band_index,
        window.width,
        window.height,
        window.x,
        window.y,
        slice.valid_count()
    );
    Ok(slice)
}
