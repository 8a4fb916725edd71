//! Custom error types for slice extraction

use std::fmt;
use std::io;

use gdal::errors::GdalError;

/// Slicing-specific error types
#[derive(Debug)]
pub enum SliceError {
    /// I/O error
    IoError(io::Error),
    /// Error reported by the GDAL library
    GdalError(GdalError),
    /// Feature id not present in the layer
    MissingFeature(u64),
    /// Feature carries no geometry
    MissingGeometry(u64),
    /// Feature geometry is not a polygon
    UnsupportedGeometry(u64, String),
    /// Requested raster band does not exist
    MissingBand(isize),
    /// Window read from the raster failed
    WindowRead {
        x: i64,
        y: i64,
        width: usize,
        height: usize,
        source: GdalError,
    },
    /// Buffer length did not match the window shape
    ShapeError(ndarray::ShapeError),
    /// YAML serialization failed
    YamlError(serde_yaml::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SliceError::IoError(e) => write!(f, "I/O error: {}", e),
            SliceError::GdalError(e) => write!(f, "GDAL error: {}", e),
            SliceError::MissingFeature(fid) => write!(f, "Feature {} not found in layer", fid),
            SliceError::MissingGeometry(fid) => write!(f, "Feature {} has no geometry", fid),
            SliceError::UnsupportedGeometry(fid, kind) => {
                write!(f, "Feature {} has unsupported geometry type: {}", fid, kind)
            }
            SliceError::MissingBand(band) => write!(f, "Raster band {} does not exist", band),
            SliceError::WindowRead { x, y, width, height, source } => write!(
                f,
                "Failed to read {}x{} raster window at ({}, {}): {}",
                width, height, x, y, source
            ),
            SliceError::ShapeError(e) => write!(f, "Array shape error: {}", e),
            SliceError::YamlError(e) => write!(f, "YAML serialization error: {}", e),
            SliceError::GenericError(msg) => write!(f, "Slice error: {}", msg),
        }
    }
}

impl std::error::Error for SliceError {}

impl From<io::Error> for SliceError {
    fn from(error: io::Error) -> Self {
        SliceError::IoError(error)
    }
}

impl From<GdalError> for SliceError {
    fn from(error: GdalError) -> Self {
        SliceError::GdalError(error)
    }
}

impl From<ndarray::ShapeError> for SliceError {
    fn from(error: ndarray::ShapeError) -> Self {
        SliceError::ShapeError(error)
    }
}

impl From<serde_yaml::Error> for SliceError {
    fn from(error: serde_yaml::Error) -> Self {
        SliceError::YamlError(error)
    }
}

impl From<String> for SliceError {
    fn from(msg: String) -> Self {
        SliceError::GenericError(msg)
    }
}

/// Result type for slicing operations
pub type SliceResult<T> = Result<T, SliceError>;
