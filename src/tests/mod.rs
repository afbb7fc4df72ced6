mod addresses_tests;
