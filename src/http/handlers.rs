//! Request handlers for the public API.
//!
//! # Responsibilities
//! - Validate query parameters
//! - Call the upstream client
//! - Wrap results in the success or error envelope
//!
//! Goods get a second filter here: the upstream is asked with the string
//! parameter, then the validated list is narrowed to records whose numeric
//! `id_pelabuhan` equals the parsed parameter.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::HeaderMap,
    Json,
};
use serde_json::{json, Value};

use crate::http::request::request_id;
use crate::http::response::{ApiError, ApiResponse};
use crate::http::server::AppState;
use crate::records::{Barang, Negara, Pelabuhan};
use crate::upstream::UpstreamError;

const API_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Raw query pairs in request order. Repeated keys are kept.
pub type QueryPairs = Vec<(String, String)>;

/// First value given for `name`, if any.
pub fn first_param<'a>(pairs: &'a [(String, String)], name: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.as_str())
}

/// Check a required query parameter and return its trimmed value.
pub fn required_param(name: &str, value: Option<&str>) -> Result<String, ApiError> {
    let value = value.unwrap_or_default();
    if value.is_empty() {
        return Err(ApiError::Parameter(format!("Parameter {name} is required")));
    }

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Parameter(format!("Parameter {name} cannot be empty")));
    }

    Ok(trimmed.to_string())
}

/// Parse the port id the goods list is narrowed to.
pub fn parse_port_id(value: &str) -> Result<i64, ApiError> {
    value.parse::<i64>().map_err(|_| {
        ApiError::Parameter("Invalid id_pelabuhan parameter, must be a number".to_string())
    })
}

/// Keep goods whose owning port equals `id_pelabuhan`.
pub fn filter_barangs_by_port(barangs: Vec<Barang>, id_pelabuhan: i64) -> Vec<Barang> {
    barangs
        .into_iter()
        .filter(|b| b.id_pelabuhan == id_pelabuhan)
        .collect()
}

fn upstream_failure(request_id: &str, message: &'static str, source: UpstreamError) -> ApiError {
    tracing::error!(request_id = %request_id, error = %source, "{}", message);
    ApiError::Upstream { message, source }
}

fn query_failure(request_id: &str, rejection: QueryRejection) -> ApiError {
    tracing::warn!(request_id = %request_id, error = %rejection, "Rejected query string");
    ApiError::Parameter(rejection.body_text())
}

pub async fn get_negaras(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<ApiResponse<Negara>, ApiError> {
    let request_id = request_id(&headers);

    let negaras = state
        .upstream
        .get_negaras()
        .await
        .map_err(|e| upstream_failure(&request_id, "Failed to fetch countries data", e))?;

    tracing::debug!(request_id = %request_id, count = negaras.len(), "Countries served");
    Ok(ApiResponse::listing(
        negaras,
        "Countries data retrieved successfully",
        "No countries found",
    ))
}

pub async fn get_pelabuhans(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<ApiResponse<Pelabuhan>, ApiError> {
    let request_id = request_id(&headers);
    let Query(pairs) = query.map_err(|r| query_failure(&request_id, r))?;
    let id_negara = required_param("id_negara", first_param(&pairs, "id_negara"))?;

    let pelabuhans = state
        .upstream
        .get_pelabuhans(&id_negara)
        .await
        .map_err(|e| upstream_failure(&request_id, "Failed to fetch ports data", e))?;

    tracing::debug!(
        request_id = %request_id,
        id_negara = %id_negara,
        count = pelabuhans.len(),
        "Ports served"
    );
    Ok(ApiResponse::listing(
        pelabuhans,
        "Ports data retrieved successfully",
        "No ports found for the specified country",
    ))
}

pub async fn get_barangs(
    State(state): State<AppState>,
    headers: HeaderMap,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<ApiResponse<Barang>, ApiError> {
    let request_id = request_id(&headers);
    let Query(pairs) = query.map_err(|r| query_failure(&request_id, r))?;
    let id_pelabuhan = required_param("id_pelabuhan", first_param(&pairs, "id_pelabuhan"))?;
    let port_id = parse_port_id(&id_pelabuhan)?;

    let barangs = state
        .upstream
        .get_barangs(&id_pelabuhan)
        .await
        .map_err(|e| upstream_failure(&request_id, "Failed to fetch goods data", e))?;

    let validated = barangs.len();
    let barangs = filter_barangs_by_port(barangs, port_id);

    tracing::debug!(
        request_id = %request_id,
        id_pelabuhan = port_id,
        validated,
        count = barangs.len(),
        "Goods served"
    );
    Ok(ApiResponse::listing(
        barangs,
        "Goods data retrieved successfully",
        "No goods found for the specified port",
    ))
}

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Server is running",
        "version": API_VERSION,
    }))
}

pub async fn root() -> Json<Value> {
    Json(json!({
        "status": "success",
        "message": "Pelabuhan Nusantara API Server",
        "version": API_VERSION,
        "endpoints": {
            "countries": "/api/v1/negaras",
            "ports": "/api/v1/pelabuhans?id_negara={id}",
            "goods": "/api/v1/barangs?id_pelabuhan={id}",
            "health": "/health",
        },
    }))
}

pub async fn not_found() -> ApiError {
    ApiError::NotFound
}
