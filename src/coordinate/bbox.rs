//! Bounding box structure for polygon extents

use geo::Rect;

/// An axis-aligned bounding box in lon/lat coordinates
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    /// Minimum longitude
    pub min_lon: f64,
    /// Minimum latitude
    pub min_lat: f64,
    /// Maximum longitude
    pub max_lon: f64,
    /// Maximum latitude
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        BoundingBox {
            min_lon,
            min_lat,
            max_lon,
            max_lat,
        }
    }

    /// Build from a geo rectangle (x is longitude, y is latitude)
    pub fn from_rect(rect: Rect<f64>) -> Self {
        BoundingBox::new(rect.min().x, rect.min().y, rect.max().x, rect.max().y)
    }

    /// Width of the box in degrees of longitude
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the box in degrees of latitude
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}
