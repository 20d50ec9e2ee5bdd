//! Integration test modules.

mod config_test;
mod swing_pipeline_test;
