mod polygon_tests;
