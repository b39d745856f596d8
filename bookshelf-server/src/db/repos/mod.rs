//! Repository implementations for database access
//!
//! Each repository operation is exactly one parameterized statement.

pub mod books;

pub use books::BookRepo;
