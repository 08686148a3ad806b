//! Bookstore Domain Concerns

pub mod books;
pub mod health;
