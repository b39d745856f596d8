//! bookshelf-server: server-rendered CRUD over a single `Books` table
//!
//! Layers, leaf-first:
//! - [`db::pool`] - pooled PostgreSQL access (`Database`)
//! - [`db::schema`] - create-if-missing table plus seed rows
//! - [`db::repos`] - one query per book operation
//! - [`http`] - axum routes rendering [`views`]

pub mod config;
pub mod db;
pub mod http;
pub mod models;
pub mod views;

pub use config::{DbConfig, ServerConfig};
pub use db::{ensure_schema, BookRepo, Database, DbError, SchemaReport};
pub use http::{build_router, run_server, AppState, ServerError, WebError};
pub use models::{Book, BookForm};
