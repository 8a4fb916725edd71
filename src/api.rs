use std::path::Path;
use log::info;

use crate::slicer::errors::SliceResult;
use crate::slicer::SliceIterator;
use crate::utils::logger::Logger;

/// Main interface to the ShapeSlice library
pub struct ShapeSlice {
    logger: Logger,
}

impl ShapeSlice {
    /// Create a new ShapeSlice instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "shapeslice.log"
    ///
    /// # Returns
    /// A ShapeSlice instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> SliceResult<Self> {
        let log_path = log_file.unwrap_or("shapeslice.log");
        let logger = Logger::new(log_path)?;
        Ok(ShapeSlice { logger })
    }

    /// Open a shapefile/raster pair for slicing
    ///
    /// Returns a pull-based iterator that yields one fully-computed record
    /// per feature, in the shapefile's native record order. Both datasets
    /// are opened once and owned by the iterator.
    ///
    /// # Arguments
    /// * `shapefile` - Path to the input shapefile
    /// * `raster` - Path to the co-registered raster (GeoTIFF)
    /// * `band` - 1-based raster band to slice
    ///
    /// # Returns
    /// A SliceIterator, or an error if either dataset cannot be opened
    pub fn slice(&self, shapefile: &str, raster: &str, band: isize) -> SliceResult<SliceIterator> {
        info!("Slicing {} by features of {} (band {})", raster, shapefile, band);
        self.logger
            .log(&format!("Opening shapefile {} and raster {}", shapefile, raster))?;

        let iterator = SliceIterator::open(Path::new(shapefile), Path::new(raster), band)?;
        self.logger
            .log(&format!("{} features to process", iterator.feature_count()))?;
        Ok(iterator)
    }
}
