//! Bookstore catalog domain, persistence and schema bootstrap.

pub mod context;
pub mod database;
pub mod domain;
pub mod schema;

#[cfg(test)]
mod test;

mod ids;
