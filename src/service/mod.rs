//! JSON-over-HTTP facade built on axum.

pub mod config;
pub mod envelope;
pub mod handlers;
pub mod request;
pub mod router;

pub use config::ServiceConfig;
pub use envelope::ApiResponse;
pub use router::build_router;
