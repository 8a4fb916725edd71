mod bbox_tests;
mod grid_tests;
