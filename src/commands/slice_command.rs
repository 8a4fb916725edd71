//! Slice extraction command
//!
//! This module implements the command that drives the whole pipeline:
//! iterate the shapefile's features, extract a masked raster slice per
//! polygon, and stream one YAML document per feature to stdout.

use std::io::Write;

use clap::ArgMatches;
use log::{error, info};

use crate::api::ShapeSlice;
use crate::commands::command_traits::Command;
use crate::slicer::errors::{SliceError, SliceResult};
use crate::utils::logger::Logger;
use crate::utils::progress::ProgressTracker;

/// Command for slicing a raster by every polygon in a shapefile
pub struct SliceCommand<'a> {
    /// Path to the input shapefile
    shapefile: String,
    /// Path to the input raster
    raster: String,
    /// 1-based raster band to slice
    band: isize,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> SliceCommand<'a> {
    /// Create a new slice command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    ///
    /// # Returns
    /// A new SliceCommand instance or an error
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> SliceResult<Self> {
        let shapefile = args
            .get_one::<String>("shapefile")
            .ok_or_else(|| SliceError::GenericError("Missing shapefile path".to_string()))?
            .clone();
        info!("Shapefile: {}", shapefile);

        let raster = args
            .get_one::<String>("raster")
            .ok_or_else(|| SliceError::GenericError("Missing raster path".to_string()))?
            .clone();
        info!("Raster: {}", raster);

        let band = args
            .get_one::<String>("band")
            .map(|s| s.as_str())
            .unwrap_or("1")
            .parse::<isize>()
            .map_err(|_| SliceError::GenericError("Invalid band number".to_string()))?;
        info!("Band: {}", band);

        Ok(SliceCommand {
            shapefile,
            raster,
            band,
            logger,
        })
    }
}

impl<'a> Command for SliceCommand<'a> {
    fn execute(&self) -> SliceResult<()> {
        info!(
            "Executing slice command: {} against {}",
            self.shapefile, self.raster
        );

        let api = ShapeSlice::new(Some("shapeslice.log"))?;
        let iterator = api.slice(&self.shapefile, &self.raster, self.band)?;

        let progress = ProgressTracker::new(iterator.feature_count(), "Slicing features");
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        for record in iterator {
            let record = match record {
                Ok(record) => record,
                Err(e) => {
                    error!("Slice extraction failed: {}", e);
                    return Err(e);
                }
            };

            let (height, width) = record.slice.shape();
            info!(
                "Feature {}: {}x{} slice, {} valid cells",
                record.index,
                height,
                width,
                record.slice.valid_count()
            );

            writeln!(out, "--- # feature {}", record.index)?;
            let document = serde_yaml::to_string(&record.to_yaml())?;
            write!(out, "{}", document)?;
            progress.increment(1);
        }

        out.flush()?;
        progress.finish();
        self.logger.log("Slice extraction successful")?;
        Ok(())
    }
}
