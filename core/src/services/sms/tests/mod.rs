//! Unit tests for the SMS provider registry

mod registry_tests;
