//! API route definitions
//!
//! - /api/v1/report - Header and page listing
//! - /api/v1/charts - Resolved chart descriptors
//! - /api/v1/charts/:id/figure - Plotly figure for one chart
//! - /api/v1/well - Well metadata rows, one page at a time
//! - /api/v1/nav - Navigation state for a query

use axum::{routing::get, Router};

use super::handlers::{self, ReportState};

/// JSON API routes, nested under `/api/v1`
pub fn api_routes(state: ReportState) -> Router {
    Router::new()
        .route("/report", get(handlers::get_report))
        .route("/charts", get(handlers::get_charts))
        .route("/charts/:id/figure", get(handlers::get_chart_figure))
        .route("/well", get(handlers::get_well))
        .route("/nav", get(handlers::get_nav))
        .with_state(state)
}

/// The HTML report and health check at root level
pub fn page_routes(state: ReportState) -> Router {
    Router::new()
        .route("/", get(handlers::get_index))
        .route("/health", get(handlers::health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::types::{Curve, LasLog};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    fn create_test_state() -> ReportState {
        let log = LasLog {
            curves: vec![
                Curve::new("DEPT", "F", "Depth", vec![1.0, 2.0]),
                Curve::new("TNPS", "V/V", "Neutron", vec![0.2, 0.3]),
            ],
            ..LasLog::default()
        };
        ReportState::new(log, ReportConfig::default(), "test.las")
    }

    async fn status_of(app: Router, uri: &str) -> StatusCode {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
            .status()
    }

    #[tokio::test]
    async fn test_api_routes_report() {
        let app = api_routes(create_test_state());
        assert_eq!(status_of(app, "/report").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_api_routes_figure() {
        let app = api_routes(create_test_state());
        assert_eq!(
            status_of(app, "/charts/las-curves-ctn/figure").await,
            StatusCode::OK
        );
    }

    #[tokio::test]
    async fn test_api_routes_well_without_entries() {
        let app = api_routes(create_test_state());
        assert_eq!(status_of(app, "/well").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_page_routes_health() {
        let app = page_routes(create_test_state());
        assert_eq!(status_of(app, "/health").await, StatusCode::OK);
    }
}
