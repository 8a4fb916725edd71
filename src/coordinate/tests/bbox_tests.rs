//! Tests for the bounding box

extern crate std;

use geo::{Coord, Rect};

use crate::coordinate::BoundingBox;

#[test]
fn test_bbox_dimensions() {
    let bbox = BoundingBox::new(10.0, -5.0, 14.0, -2.0);
    std::assert_eq!(bbox.width(), 4.0);
    std::assert_eq!(bbox.height(), 3.0);
}

#[test]
fn test_bbox_from_rect() {
    let rect = Rect::new(
        Coord { x: 1.0, y: 2.0 },
        Coord { x: 3.0, y: 7.0 },
    );
    let bbox = BoundingBox::from_rect(rect);
    std::assert_eq!(bbox.min_lon, 1.0);
    std::assert_eq!(bbox.min_lat, 2.0);
    std::assert_eq!(bbox.max_lon, 3.0);
    std::assert_eq!(bbox.max_lat, 7.0);
}
