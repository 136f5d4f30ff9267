//! HTTP interface using Axum
//!
//! - `/` serves the HTML report; navigation arrives as query parameters
//! - `/api/v1/*` exposes the same report as JSON inside the response envelope
//! - `/static/*` serves the stylesheet and chart script via `rust-embed`
//!   (compiled into the binary)

pub mod envelope;
pub mod handlers;
mod routes;

pub use handlers::ReportState;

use axum::extract::Path;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use rust_embed::Embed;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use envelope::ApiErrorResponse;

/// Env var holding a comma-separated list of allowed CORS origins.
pub const CORS_ENV_VAR: &str = "LAS_REPORT_CORS_ORIGINS";

/// Report stylesheet and chart script from `static/`.
#[derive(Embed)]
#[folder = "static/"]
struct ReportAssets;

/// Serve an embedded asset.
async fn serve_asset(Path(path): Path<String>) -> Response {
    match ReportAssets::get(&path) {
        Some(content) => {
            let mime = mime_guess::from_path(&path).first_or_octet_stream();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.as_ref())],
                content.data.into_owned(),
            )
                .into_response()
        }
        None => ApiErrorResponse::not_found(format!("No static asset '{path}'")),
    }
}

async fn not_found() -> Response {
    ApiErrorResponse::not_found("No such endpoint")
}

/// Build a CORS layer that is restrictive by default (same-origin only).
///
/// Set `LAS_REPORT_CORS_ORIGINS` to a comma-separated list of allowed
/// origins to let another front end read the JSON API.
fn build_cors_layer() -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    match std::env::var(CORS_ENV_VAR) {
        Ok(origins) => {
            let allowed: Vec<_> = origins
                .split(',')
                .filter_map(|o| o.trim().parse().ok())
                .collect();
            tracing::info!(origins = %origins, "CORS: allowing configured origins");
            base.allow_origin(allowed)
        }
        Err(_) => base,
    }
}

/// Create the complete application router.
pub fn create_app(state: ReportState) -> Router {
    let cors = build_cors_layer();

    Router::new()
        .nest("/api/v1", routes::api_routes(state.clone()))
        .merge(routes::page_routes(state))
        .route("/static/*path", get(serve_asset))
        .fallback(not_found)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors)
}
