//! Report Configuration Module
//!
//! ## Loading Order
//!
//! 1. `--config PATH` on the command line
//! 2. `LAS_REPORT_CONFIG` environment variable (path to TOML file)
//! 3. `las_report.toml` in the current working directory
//! 4. Built-in defaults
//!
//! The loaded [`ReportConfig`] is passed to the server state explicitly.

mod report_config;
pub mod validation;

pub use report_config::*;
