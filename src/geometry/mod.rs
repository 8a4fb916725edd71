//! Vector geometry handling
//!
//! Assembles shapefile geometry records into the polygon entity the
//! rasterizer tests containment against.

mod polygon;

#[cfg(test)]
mod tests;

pub use self::polygon::FeaturePolygon;
