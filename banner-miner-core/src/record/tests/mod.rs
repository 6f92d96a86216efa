mod hostname_tests;
