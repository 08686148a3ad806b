//! App Context

use std::sync::Arc;

use crate::{
    database::Db,
    domain::{
        books::{BooksService, PgBooksService},
        health::{HealthService, PgHealthService},
    },
};

#[derive(Clone)]
pub struct AppContext {
    pub books: Arc<dyn BooksService>,
    pub health: Arc<dyn HealthService>,
}

impl AppContext {
    /// Build application context over an open database pool.
    #[must_use]
    pub fn from_db(db: &Db) -> Self {
        Self {
            books: Arc::new(PgBooksService::new(db.clone())),
            health: Arc::new(PgHealthService::new(db.clone())),
        }
    }
}
