//! Domain models
//!
//! Nothing is validated here; NOT NULL and length limits are left to the
//! `Books` table.

pub mod book;

pub use book::{Book, BookForm};
