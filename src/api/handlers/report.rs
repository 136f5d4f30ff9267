//! Report endpoints: the HTML document, summary and navigation state

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Response};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, error};

use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::report::{render_report, NavQuery, NavState, PageSummary, ReportHeader};

use super::ReportState;

// ============================================================================
// HTML Report
// ============================================================================

/// GET / - The report document, showing the page selected by the query
pub async fn get_index(
    State(state): State<ReportState>,
    Query(query): Query<NavQuery>,
) -> Response {
    let report = state.build_report();
    let nav = NavState::from_query(&query, report.page_count(), &state.config.report);
    debug!(page = nav.page_index, view = %nav.view, "Rendering report");

    match render_report(&report, &state.log, &nav, &state.config.charts) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render report");
            ApiErrorResponse::internal(e.to_string())
        }
    }
}

// ============================================================================
// Report Summary
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ReportSummary {
    pub header: ReportHeader,
    pub generated_at: DateTime<Utc>,
    pub page_count: usize,
    pub pages: Vec<PageSummary>,
}

/// GET /api/v1/report - Header and page listing
pub async fn get_report(State(state): State<ReportState>) -> Response {
    let report = state.build_report();
    ApiResponse::ok(ReportSummary {
        page_count: report.page_count(),
        pages: report.pages.iter().map(|p| p.summary()).collect(),
        header: report.header,
        generated_at: report.generated_at,
    })
}

// ============================================================================
// Navigation
// ============================================================================

/// GET /api/v1/nav - Navigation state after applying the query
///
/// Query params: `page`, `view`, `size`, `medium`, `move`
pub async fn get_nav(
    State(state): State<ReportState>,
    Query(query): Query<NavQuery>,
) -> Response {
    let page_count = state.build_report().page_count();
    ApiResponse::ok(NavState::from_query(
        &query,
        page_count,
        &state.config.report,
    ))
}
