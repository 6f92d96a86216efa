mod count_table_tests;
