//! Polygon assembly from shapefile geometry records
//!
//! A shape record may carry several rings. They are combined with
//! additive union semantics: every ring contributes to the feature's
//! area, and no distinction is made between outer boundaries and holes.

use geo::{BoundingRect, Centroid, Contains};
use geo::{Geometry, LineString, MultiPolygon, Point, Polygon};

use crate::coordinate::BoundingBox;
use crate::slicer::errors::{SliceError, SliceResult};

/// A feature's polygon, the additive union of its rings
#[derive(Debug, Clone)]
pub struct FeaturePolygon {
    rings: MultiPolygon<f64>,
}

/// Human-readable name of a geo geometry variant, for error messages
fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}

/// All rings of a polygon, exterior first, as hole-free polygons
fn split_rings(polygon: &Polygon<f64>) -> Vec<Polygon<f64>> {
    std::iter::once(polygon.exterior())
        .chain(polygon.interiors().iter())
        .map(|ring| Polygon::new(ring.clone(), vec![]))
        .collect()
}

impl FeaturePolygon {
    /// Build a polygon from raw rings of (lon, lat) points
    ///
    /// Each ring is closed implicitly. An empty ring list yields a
    /// degenerate polygon whose bounding box and centroid are `None`.
    pub fn from_rings(rings: Vec<Vec<(f64, f64)>>) -> Self {
        let parts = rings
            .into_iter()
            .map(|ring| Polygon::new(LineString::from(ring), vec![]))
            .collect();
        FeaturePolygon {
            rings: MultiPolygon::new(parts),
        }
    }

    /// Build a polygon from a feature's OGR geometry
    ///
    /// Multi-part shapes are flattened: every ring of every part is
    /// unioned additively, matching the flat points-plus-parts layout
    /// of the shapefile format. Non-polygonal geometry is a data error.
    pub fn from_geometry(geometry: &gdal::vector::Geometry, fid: u64) -> SliceResult<Self> {
        let geometry = geometry.to_geo()?;
        let parts = match &geometry {
            Geometry::Polygon(polygon) => split_rings(polygon),
            Geometry::MultiPolygon(multi) => multi.0.iter().flat_map(split_rings).collect(),
            other => {
                return Err(SliceError::UnsupportedGeometry(
                    fid,
                    geometry_kind(other).to_string(),
                ))
            }
        };
        Ok(FeaturePolygon {
            rings: MultiPolygon::new(parts),
        })
    }

    /// Number of rings in the union
    pub fn ring_count(&self) -> usize {
        self.rings.0.len()
    }

    /// Axis-aligned bounding box, `None` for a ringless polygon
    pub fn bounding_box(&self) -> Option<BoundingBox> {
        self.rings.bounding_rect().map(BoundingBox::from_rect)
    }

    /// Test whether a lat/lon point lies inside any ring
    pub fn is_inside(&self, lat: f64, lon: f64) -> bool {
        self.rings.contains(&Point::new(lon, lat))
    }

    /// Area-weighted centroid as (lon, lat), `None` when degenerate
    pub fn centroid(&self) -> Option<(f64, f64)> {
        self.rings.centroid().map(|point| (point.x(), point.y()))
    }
}
