mod link_diff_tests;
