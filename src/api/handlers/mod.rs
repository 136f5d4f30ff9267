//! API route handlers
//!
//! - `report`: the HTML document, report summary and navigation state
//! - `charts`: chart descriptors and their Plotly figures
//! - `well`: well metadata pages
//! - `status`: health check

mod charts;
mod report;
mod status;
mod well;

pub use charts::*;
pub use report::*;
pub use status::*;
pub use well::*;

use std::sync::Arc;

use crate::config::ReportConfig;
use crate::report::{Report, ReportBuilder};
use crate::types::LasLog;

// ============================================================================
// API State
// ============================================================================

/// Shared state for API handlers.
///
/// The log and config are immutable after startup; every request composes
/// its report from them.
#[derive(Clone)]
pub struct ReportState {
    pub log: Arc<LasLog>,
    pub config: Arc<ReportConfig>,
    /// Path the log was read from, as given on the command line
    pub source: Arc<str>,
}

impl ReportState {
    pub fn new(log: LasLog, config: ReportConfig, source: &str) -> Self {
        Self {
            log: Arc::new(log),
            config: Arc::new(config),
            source: Arc::from(source),
        }
    }

    pub fn build_report(&self) -> Report {
        ReportBuilder::from_config(&self.config.report).build(&self.log, &self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Curve;

    #[test]
    fn test_build_report_uses_config_paging() {
        let log = LasLog {
            curves: vec![
                Curve::new("DEPT", "F", "Depth", vec![1.0]),
                Curve::new("DGRC", "GAPI", "Gamma", vec![80.0]),
                Curve::new("TNPS", "V/V", "Neutron", vec![0.2]),
            ],
            ..LasLog::default()
        };
        let mut config = ReportConfig::default();
        config.report.charts_per_page = 1;

        let state = ReportState::new(log, config, "logs/a.las");
        let report = state.build_report();
        assert_eq!(report.page_count(), 2);
        assert_eq!(report.header.filename, "a.las");
    }
}
