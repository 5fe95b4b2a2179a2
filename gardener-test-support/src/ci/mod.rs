//! CI-facing knobs shared by the gardener test suites.

pub mod property_test_profile;
