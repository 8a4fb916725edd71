pub mod coordinate;
pub mod geometry;
pub mod slicer;
pub mod record;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ShapeSlice;

pub use coordinate::{BoundingBox, GridTransform};
pub use geometry::FeaturePolygon;
pub use record::FeatureSlice;
pub use slicer::{MaskedSlice, SliceError, SliceIterator, SliceResult, SliceWindow};
