//! State

use std::sync::Arc;

use bookstore_app::{
    context::AppContext,
    domain::{books::BooksService, health::HealthService},
};

/// Services shared with every handler through the depot.
#[derive(Clone)]
pub(crate) struct State {
    pub(crate) books: Arc<dyn BooksService>,
    pub(crate) health: Arc<dyn HealthService>,
}

impl State {
    #[must_use]
    pub(crate) fn new(books: Arc<dyn BooksService>, health: Arc<dyn HealthService>) -> Self {
        Self { books, health }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: AppContext) -> Arc<Self> {
        Arc::new(Self::new(app.books, app.health))
    }
}
