//! Chart endpoints

use axum::extract::{Path, State};
use axum::response::Response;

use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::report::figure;
use crate::types::ChartDescriptor;

use super::ReportState;

/// GET /api/v1/charts - Every chart the log supports, in report order
pub async fn get_charts(State(state): State<ReportState>) -> Response {
    let report = state.build_report();
    let charts: Vec<ChartDescriptor> = report.charts().cloned().collect();
    ApiResponse::ok(charts)
}

/// GET /api/v1/charts/:id/figure - Plotly figure for one chart
pub async fn get_chart_figure(
    State(state): State<ReportState>,
    Path(id): Path<String>,
) -> Response {
    let report = state.build_report();
    match report.chart(&id) {
        Some(chart) => ApiResponse::ok(figure(chart, &state.log)),
        None => ApiErrorResponse::not_found(format!("Unknown chart '{id}'")),
    }
}
