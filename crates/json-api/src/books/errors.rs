//! Book Errors

use salvo::http::StatusError;
use tracing::error;

use bookstore_app::domain::books::BooksServiceError;

pub(crate) fn into_status_error(error: BooksServiceError) -> StatusError {
    match error {
        BooksServiceError::NotFound => StatusError::not_found().brief("book not found"),
        BooksServiceError::MissingKeyword => {
            StatusError::bad_request().brief("keyword is required")
        }
        BooksServiceError::Sql(source) => {
            error!("book query failed: {source}");

            StatusError::internal_server_error().brief(source.to_string())
        }
    }
}
