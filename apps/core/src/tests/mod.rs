//! Test Module
//!
//! Cross-component suites for the analysis pipeline. Unit tests live next to
//! the code they cover.
//!
//! ## Test Categories
//! - `pipeline_tests`: Thread analysis end to end, custom lexicons and limits
//! - `property_tests`: Scorer invariants checked with proptest
//! - `config_tests`: Environment-driven configuration
//! - `review_gate_tests`: Merge gate and pull-request records
//! - `input_tests`: JSON input files

pub mod property_tests;
pub mod review_gate_tests;
