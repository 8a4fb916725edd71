//! Pull-based iteration over shapefile features
//!
//! The iterator owns both dataset handles and materializes exactly one
//! fully-computed record per pull. Its length is the shapefile's record
//! count and it is not restartable without reopening the sources. The
//! first error poisons the iterator: fail-fast, no partial output.

use std::path::Path;

use gdal::vector::LayerAccess;
use gdal::Dataset;
use log::info;

use crate::coordinate::GridTransform;
use crate::geometry::FeaturePolygon;
use crate::record::{field_to_yaml, FeatureSlice};
use crate::slicer::errors::{SliceError, SliceResult};
use crate::slicer::extractor::slice_band;

/// Iterator yielding one masked slice record per shapefile feature
pub struct SliceIterator {
    vector: Dataset,
    raster: Dataset,
    grid: GridTransform,
    band: isize,
    index: u64,
    count: u64,
}

impl SliceIterator {
    /// Open the shapefile and raster and prepare iteration
    ///
    /// Both handles are opened once and owned by the iterator for its
    /// whole lifetime. The requested 1-based band is validated up front
    /// so a bad band number fails before any feature is processed.
    pub fn open(shapefile: &Path, raster_path: &Path, band: isize) -> SliceResult<Self> {
        let mut vector = Dataset::open(shapefile)?;
        let raster = Dataset::open(raster_path)?;

        if band < 1 || band > raster.raster_count() {
            return Err(SliceError::MissingBand(band));
        }

        let grid = GridTransform::from_dataset(&raster)?;
        let count = vector.layer(0)?.feature_count();
        info!(
            "Opened {} features against raster band {} ({}x{} pixels)",
            count,
            band,
            raster.raster_size().0,
            raster.raster_size().1
        );

        Ok(SliceIterator {
            vector,
            raster,
            grid,
            band,
            index: 0,
            count,
        })
    }

    /// Number of features in the shapefile
    pub fn feature_count(&self) -> u64 {
        self.count
    }

    /// The raster's grid transform
    pub fn grid(&self) -> &GridTransform {
        &self.grid
    }

    /// Compute the full record for one feature id
    fn extract(&mut self, fid: u64) -> SliceResult<FeatureSlice> {
        let layer = self.vector.layer(0)?;
        let feature = layer
            .feature(fid)
            .ok_or(SliceError::MissingFeature(fid))?;

        let attributes = feature
            .fields()
            .map(|(name, value)| (name, field_to_yaml(value)))
            .collect();

        let geometry = feature
            .geometry()
            .ok_or(SliceError::MissingGeometry(fid))?;
        let polygon = FeaturePolygon::from_geometry(geometry, fid)?;

        let slice = slice_band(&self.raster, &self.grid, &polygon, self.band)?;
        Ok(FeatureSlice {
            index: fid,
            attributes,
            band: self.band,
            slice,
            centroid: polygon.centroid(),
        })
    }
}

impl Iterator for SliceIterator {
    type Item = SliceResult<FeatureSlice>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.count {
            return None;
        }
        let fid = self.index;
        self.index += 1;

        let result = self.extract(fid);
        if result.is_err() {
            // Fail-fast: nothing more is produced after an error
            self.index = self.count;
        }
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.count - self.index) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SliceIterator {}
