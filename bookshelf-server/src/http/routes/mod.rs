//! Route handlers organized by resource

pub mod books;
pub mod health;
pub mod pages;
