mod fake;

mod business_tests;
