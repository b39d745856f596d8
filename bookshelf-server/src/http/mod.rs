//! HTTP layer
//!
//! Axum server with:
//! - Server-rendered HTML routes over the book repository
//! - Request tracing
//! - Schema setup awaited before the listener binds
//! - Graceful shutdown, then pool close

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::WebError;
pub use server::{build_router, run_server, run_server_with_shutdown, AppState, ServerError};
