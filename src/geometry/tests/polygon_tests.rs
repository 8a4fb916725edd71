//! Tests for polygon assembly

extern crate std;

use crate::geometry::FeaturePolygon;

fn unit_square(offset_lon: f64, offset_lat: f64) -> Vec<(f64, f64)> {
    vec![
        (offset_lon, offset_lat),
        (offset_lon + 1.0, offset_lat),
        (offset_lon + 1.0, offset_lat + 1.0),
        (offset_lon, offset_lat + 1.0),
    ]
}

#[test]
fn test_single_ring_containment() {
    let polygon = FeaturePolygon::from_rings(vec![unit_square(0.0, 0.0)]);

    std::assert_eq!(polygon.ring_count(), 1);
    std::assert!(polygon.is_inside(0.5, 0.5));
    std::assert!(!polygon.is_inside(1.5, 0.5));
    std::assert!(!polygon.is_inside(0.5, -0.5));
}

#[test]
fn test_multi_part_rings_union_additively() {
    // Two disjoint squares: inside either ring counts, the gap does not
    let polygon = FeaturePolygon::from_rings(vec![
        unit_square(0.0, 0.0),
        unit_square(3.0, 0.0),
    ]);

    std::assert_eq!(polygon.ring_count(), 2);
    std::assert!(polygon.is_inside(0.5, 0.5));
    std::assert!(polygon.is_inside(0.5, 3.5));
    std::assert!(!polygon.is_inside(0.5, 2.0));
}

#[test]
fn test_bounding_box_spans_all_rings() {
    let polygon = FeaturePolygon::from_rings(vec![
        unit_square(0.0, 0.0),
        unit_square(3.0, 0.0),
    ]);

    let bbox = polygon.bounding_box().unwrap();
    std::assert_eq!(bbox.min_lon, 0.0);
    std::assert_eq!(bbox.max_lon, 4.0);
    std::assert_eq!(bbox.min_lat, 0.0);
    std::assert_eq!(bbox.max_lat, 1.0);
}

#[test]
fn test_centroid_of_symmetric_polygon() {
    // Unit square centered at the origin: centroid is exactly the center
    let polygon = FeaturePolygon::from_rings(vec![vec![
        (-0.5, -0.5),
        (0.5, -0.5),
        (0.5, 0.5),
        (-0.5, 0.5),
    ]]);

    let (lon, lat) = polygon.centroid().unwrap();
    std::assert_eq!(lon, 0.0);
    std::assert_eq!(lat, 0.0);
}

#[test]
fn test_degenerate_polygon() {
    let polygon = FeaturePolygon::from_rings(vec![]);

    std::assert_eq!(polygon.ring_count(), 0);
    std::assert!(polygon.bounding_box().is_none());
    std::assert!(polygon.centroid().is_none());
    std::assert!(!polygon.is_inside(0.0, 0.0));
}
