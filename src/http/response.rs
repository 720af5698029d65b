//! Response envelopes and error mapping.
//!
//! # Responsibilities
//! - Wrap handler results in the uniform success envelope
//! - Map handler errors to an HTTP status and the error envelope
//!
//! # Design Decisions
//! - `data` is always serialized as an array, never omitted or null
//! - `error` is omitted from the error envelope when there is no detail
//! - Parameter errors are surfaced verbatim; upstream errors get a generic
//!   message plus the underlying error text

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::upstream::UpstreamError;

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

/// `{"status":"success","message":...,"data":[...]}`.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub status: &'static str,
    pub message: &'static str,
    pub data: Vec<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: &'static str, data: Vec<T>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message,
            data,
        }
    }

    /// Success envelope whose message depends on whether anything matched.
    pub fn listing(data: Vec<T>, found: &'static str, empty: &'static str) -> Self {
        let message = if data.is_empty() { empty } else { found };
        Self::success(message, data)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// `{"status":"error","message":...,"error":...}`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>, error: Option<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
            error,
        }
    }
}

/// Errors a handler can answer with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing, blank or malformed query parameter.
    #[error("{0}")]
    Parameter(String),

    /// The upstream call failed.
    #[error("{message}: {source}")]
    Upstream {
        message: &'static str,
        #[source]
        source: UpstreamError,
    },

    #[error("Endpoint not found")]
    NotFound,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Parameter(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match self {
            ApiError::Parameter(message) => ErrorResponse::new(message, None),
            ApiError::Upstream { message, source } => {
                ErrorResponse::new(message, Some(source.to_string()))
            }
            ApiError::NotFound => ErrorResponse::new("Endpoint not found", None),
        };
        (status, Json(body)).into_response()
    }
}
