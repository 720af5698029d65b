//! Record handling subsystem.
//!
//! # Data Flow
//! ```text
//! upstream body (bytes)
//!     → normalize.rs (envelope or bare list → candidate records)
//!     → validate.rs (per-kind predicate + text cleanup)
//!     → validated records handed back to the handler
//! ```
//!
//! # Design Decisions
//! - Both stages are pure functions over owned values
//! - Decoding tolerates missing and null fields the way the upstream emits them
//! - Validation never fails; rejected records are dropped and counted

pub mod normalize;
pub mod types;
pub mod validate;

pub use normalize::{normalize, MalformedResponse, ResponseShape};
pub use types::{Barang, Negara, Pelabuhan};
pub use validate::{validate_barangs, validate_negaras, validate_pelabuhans};
