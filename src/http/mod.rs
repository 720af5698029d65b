//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID assigned or propagated)
//!     → handlers.rs (query validation, upstream call)
//!     → response.rs (success / error envelope)
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod response;
pub mod server;

pub use request::{request_id, MakeRequestUuidV4, X_REQUEST_ID};
pub use response::{ApiError, ApiResponse, ErrorResponse};
pub use server::{AppState, HttpServer};
