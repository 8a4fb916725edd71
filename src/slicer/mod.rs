//! Masked slice extraction
//!
//! The core of the tool: snapping polygon bounding boxes to the raster
//! grid, reading the covering window, and masking cells by polygon
//! containment at the cell center.

pub mod errors;
mod extractor;
mod iter;
mod masked;
mod window;

#[cfg(test)]
mod tests;

pub use self::errors::{SliceError, SliceResult};
pub use self::extractor::slice_band;
pub use self::iter::SliceIterator;
pub use self::masked::MaskedSlice;
pub use self::window::SliceWindow;
