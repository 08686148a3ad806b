//! Books service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BooksServiceError {
    #[error("book not found")]
    NotFound,

    #[error("keyword is required")]
    MissingKeyword,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for BooksServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        Self::Sql(error)
    }
}
