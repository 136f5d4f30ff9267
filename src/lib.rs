//! LAS Report: paginated reports for LAS well-log files
//!
//! ## Architecture
//!
//! - **las**: LAS 2.0 reader producing a [`LasLog`]
//! - **curves**: Chart group table, axis assignment and resolution into
//!   [`ChartDescriptor`]s
//! - **report**: Pagination, report assembly, navigation, Plotly figures and
//!   HTML rendering
//! - **config**: TOML configuration with unknown-key warnings
//! - **api**: Axum server exposing the report as HTML and JSON

pub mod api;
pub mod config;
pub mod curves;
pub mod las;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use config::ReportConfig;
pub use curves::resolve;
pub use las::{parse_str, read_file, LasError};
pub use report::{paginate, Report, ReportBuilder};
pub use types::{AxisSpec, ChartDescriptor, Curve, CurveLookup, LasLog, PlacedCurve};
