//! Get Book Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    books::{errors::into_status_error, responses::BookResponse},
    extensions::*,
};

/// Get Book Handler
///
/// Returns a single book.
#[endpoint(
    tags("books"),
    summary = "Get Book",
    responses(
        (status_code = StatusCode::OK, description = "Book"),
        (status_code = StatusCode::BAD_REQUEST, description = "Invalid book id"),
        (status_code = StatusCode::NOT_FOUND, description = "Book not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<BookResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let book = state
        .books
        .get_book(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(book.into()))
}
