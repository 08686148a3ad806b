//! Book Index Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use bookstore_app::domain::books::data::BookFilter;

use crate::{
    books::{errors::into_status_error, responses::BookResponse},
    extensions::*,
};

/// Book Index Handler
///
/// Returns all books, optionally restricted to one category.
#[endpoint(
    tags("books"),
    summary = "List Books",
    responses(
        (status_code = StatusCode::OK, description = "Books"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    category: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<BookResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let books = state
        .books
        .list_books(BookFilter::new(category.into_inner()))
        .await
        .map_err(into_status_error)?;

    Ok(Json(books.into_iter().map(Into::into).collect()))
}
