mod heightfield_tests;
mod world_tests;
