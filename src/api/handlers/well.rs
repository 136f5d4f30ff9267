//! Well metadata endpoint

use axum::extract::{Query, State};
use axum::response::Response;
use serde::{Deserialize, Serialize};

use crate::api::envelope::{ApiErrorResponse, ApiResponse};
use crate::report::{PageContent, SectionKind, WellRow};

use super::ReportState;

/// Query parameters for the well endpoint
#[derive(Debug, Deserialize)]
pub struct WellQuery {
    /// 1-based index among the well pages (default 1)
    pub page: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct WellPageResponse {
    pub page: usize,
    pub page_count: usize,
    /// Report-wide page number
    pub report_page: usize,
    pub rows: Vec<WellRow>,
}

/// GET /api/v1/well - Rows of one well metadata page
pub async fn get_well(
    State(state): State<ReportState>,
    Query(query): Query<WellQuery>,
) -> Response {
    let page = match query.page.as_deref().map(str::parse::<usize>) {
        None => 1,
        Some(Ok(n)) if n > 0 => n,
        Some(_) => return ApiErrorResponse::bad_request("page must be a positive integer"),
    };

    let report = state.build_report();
    let well_pages: Vec<_> = report.pages_in(SectionKind::Well).collect();
    let page_count = well_pages.len();

    match well_pages.get(page - 1).map(|p| (p.number, &p.content)) {
        Some((report_page, PageContent::WellTable(rows))) => ApiResponse::ok(WellPageResponse {
            page,
            page_count,
            report_page,
            rows: rows.clone(),
        }),
        _ => ApiErrorResponse::not_found(format!(
            "Well page {page} out of range (1..={page_count})"
        )),
    }
}
