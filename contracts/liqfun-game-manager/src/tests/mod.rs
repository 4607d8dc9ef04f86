mod creation_tests;
