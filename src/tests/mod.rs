//! Internal test modules - whitebox tests with crate access
//!
//! Harness-driven acceptance tests for the terminal list and property tests
//! for the window calculation.
