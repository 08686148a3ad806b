//! Books

pub mod data;
pub mod errors;
mod query;
pub mod records;
mod repository;
mod rows;
pub mod service;

pub use errors::BooksServiceError;
pub use service::*;
