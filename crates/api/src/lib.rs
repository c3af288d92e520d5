//! HTTP API layer for polls-rs.
//!
//! This crate provides the REST API:
//!
//! - **Endpoints**: poll creation, listing, retrieval, deletion and voting
//! - **Extractors**: JSON bodies with 400-class error mapping
//! - **Middleware**: shared application state and the CORS layer
//!
//! Built on Axum 0.8 with Tower middleware stack.

pub mod endpoints;
pub mod extractors;
pub mod middleware;
pub mod response;

pub use endpoints::router;
pub use middleware::AppState;
