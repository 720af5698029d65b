//! Pelabuhan Nusantara gateway library.
//!
//! Proxies the `negaras`, `pelabuhans` and `barangs` resources of an upstream
//! REST API, cleans the returned records and re-serves them in a uniform
//! envelope.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod records;
pub mod upstream;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use upstream::UpstreamClient;
