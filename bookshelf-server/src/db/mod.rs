//! Database layer - connection pool, schema setup and repositories
//!
//! # Design Principles
//!
//! - One explicitly owned pool (`Database`), closed on shutdown
//! - Every statement is parameterized, never string-built from input
//! - Rely on DB constraints (NOT NULL, primary key), no check-then-insert
//! - One statement per repository operation, no transactions

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{Database, DbError, SqlParam};
pub use repos::BookRepo;
pub use schema::{ensure_schema, SchemaReport};
