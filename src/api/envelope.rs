//! JSON envelope for the report API
//!
//! Everything under `/api/v1` (report summary, chart list, chart figures,
//! well pages, navigation state) answers with `{ "data": ..., "meta": ... }`.
//! Lookups that fail (unknown chart id, well page out of range, a bad `page`
//! query, an unknown route or asset) answer with `{ "error": ..., "meta": ... }`
//! so a client can branch on `error.code` without parsing messages.
//! The HTML report and `/health` are not wrapped.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::Utc;
use serde::Serialize;

/// Bumped when a response shape under `/api/v1` changes incompatibly.
pub const API_VERSION: &str = "1";

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    /// RFC 3339, time the response was produced
    pub timestamp: String,
    pub version: &'static str,
}

impl ResponseMeta {
    fn now() -> Self {
        Self {
            timestamp: Utc::now().to_rfc3339(),
            version: API_VERSION,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

impl<T: Serialize> ApiResponse<T> {
    /// 200 with `data` wrapped.
    pub fn ok(data: T) -> Response {
        let body = Self {
            data,
            meta: ResponseMeta::now(),
        };
        (StatusCode::OK, axum::Json(body)).into_response()
    }
}

/// Machine-readable failure kind, serialized as `NOT_FOUND` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    BadRequest,
    #[serde(rename = "INTERNAL_ERROR")]
    Internal,
}

impl ErrorCode {
    pub const fn status(self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ErrorDetail,
    pub meta: ResponseMeta,
}

impl ApiErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Response {
        let body = Self {
            error: ErrorDetail {
                code,
                message: message.into(),
            },
            meta: ResponseMeta::now(),
        };
        (code.status(), axum::Json(body)).into_response()
    }

    /// Unknown chart, well page, asset or route.
    pub fn not_found(message: impl Into<String>) -> Response {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Query parameter that cannot be interpreted.
    pub fn bad_request(message: impl Into<String>) -> Response {
        Self::new(ErrorCode::BadRequest, message)
    }

    /// Report rendering failed.
    pub fn internal(message: impl Into<String>) -> Response {
        Self::new(ErrorCode::Internal, message)
    }
}
