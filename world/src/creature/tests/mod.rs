mod spawn_tests;
