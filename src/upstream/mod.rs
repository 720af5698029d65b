//! Upstream API access.
//!
//! # Data Flow
//! ```text
//! handler
//!     → client.rs (GET <base>/<resource>?<filter>, headers, timeout)
//!     → records::normalize (envelope or bare list)
//!     → records::validate (per-kind filter + cleanup)
//!     → Vec<Record> back to the handler
//! ```
//!
//! # Design Decisions
//! - One attempt per call; no retries, backoff or circuit breaking
//! - Any status other than 200 OK is an error carrying status, URL and body
//! - The client is built once from immutable config and shared

pub mod client;
pub mod error;

pub use client::{Resource, UpstreamClient};
pub use error::{UpstreamError, UpstreamResult};
