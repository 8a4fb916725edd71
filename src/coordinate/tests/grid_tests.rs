//! Tests for the grid transform

extern crate std;

use crate::coordinate::GridTransform;

fn unit_grid() -> GridTransform {
    GridTransform::new([0.0, 1.0, 0.0, 0.0, 0.0, -1.0])
}

#[test]
fn test_snap_to_nearest_cell() {
    let grid = unit_grid();

    // lon 0.6 is nearest to column 1, lat -0.4 nearest to row 0
    std::assert_eq!(grid.snap_to_grid(-0.4, 0.6), (1, 0));
    std::assert_eq!(grid.snap_to_grid(-1.9, 0.1), (0, 2));
}

#[test]
fn test_snap_has_no_bounds_checking() {
    let grid = unit_grid();

    // Coordinates outside the raster extent must yield negative
    // indices rather than an error
    std::assert_eq!(grid.snap_to_grid(5.0, -3.2), (-3, -5));
}

#[test]
fn test_snap_halves_resolve_downward() {
    let grid = unit_grid();

    // lon 1.5 sits exactly between columns 1 and 2
    let (x, _) = grid.snap_to_grid(0.0, 1.5);
    std::assert_eq!(x, 1);
}

#[test]
fn test_cell_center_offset() {
    let grid = unit_grid();

    let (lat, lon) = grid.cell_center(0, 0);
    std::assert_eq!(lon, 0.5);
    std::assert_eq!(lat, -0.5);

    let (lat, lon) = grid.cell_center(3, 2);
    std::assert_eq!(lon, 3.5);
    std::assert_eq!(lat, -2.5);
}

#[test]
fn test_center_then_snap_round_trips() {
    // Cell centers must snap back to their own cell for every index,
    // including negative ones, under non-unit transforms
    let grids = [
        unit_grid(),
        GridTransform::new([10.0, 0.5, 0.0, 20.0, 0.0, -0.25]),
        GridTransform::new([-180.0, 0.125, 0.0, 90.0, 0.0, -0.125]),
    ];

    for grid in &grids {
        for x in -8..16 {
            for y in -8..16 {
                let (lat, lon) = grid.cell_center(x, y);
                std::assert_eq!(grid.snap_to_grid(lat, lon), (x, y));
            }
        }
    }
}

#[test]
fn test_from_coefficients() {
    let grid = GridTransform::new([100.0, 2.0, 0.0, 50.0, 0.0, -2.0]);
    std::assert_eq!(grid.top_left_x, 100.0);
    std::assert_eq!(grid.pixel_width, 2.0);
    std::assert_eq!(grid.top_left_y, 50.0);
    std::assert_eq!(grid.pixel_height, -2.0);

    std::assert_eq!(grid.snap_to_grid(48.0, 102.0), (1, 1));
    std::assert_eq!(grid.cell_center(0, 0), (49.0, 101.0));
}
