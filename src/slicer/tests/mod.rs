mod masked_tests;
