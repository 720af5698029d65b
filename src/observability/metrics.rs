//! Metrics collection and exposition.
//!
//! # Metrics
//! - `gateway_requests_total` (counter): inbound requests by method, path, status
//! - `gateway_request_duration_seconds` (histogram): inbound latency
//! - `gateway_upstream_requests_total` (counter): upstream calls by resource, outcome
//! - `gateway_upstream_duration_seconds` (histogram): upstream latency by resource
//! - `gateway_records_total` (counter): records received and kept by resource

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics exporter listening");
    Ok(())
}

/// Record a completed inbound request.
pub fn record_request(method: &str, path: &str, status: u16, start: Instant) {
    metrics::counter!(
        "gateway_requests_total",
        "method" => method.to_string(),
        "path" => path.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
    metrics::histogram!("gateway_request_duration_seconds", "path" => path.to_string())
        .record(start.elapsed().as_secs_f64());
}

/// Record the outcome of one upstream call.
pub fn record_upstream(resource: &'static str, outcome: &'static str, start: Instant) {
    metrics::counter!(
        "gateway_upstream_requests_total",
        "resource" => resource,
        "outcome" => outcome
    )
    .increment(1);
    metrics::histogram!("gateway_upstream_duration_seconds", "resource" => resource)
        .record(start.elapsed().as_secs_f64());
}

/// Record how many records survived validation.
pub fn record_validation(resource: &'static str, kept: usize, total: usize) {
    metrics::counter!("gateway_records_total", "resource" => resource, "stage" => "received")
        .increment(total as u64);
    metrics::counter!("gateway_records_total", "resource" => resource, "stage" => "kept")
        .increment(kept as u64);
}
