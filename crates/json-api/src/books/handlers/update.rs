//! Update Book Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    books::{errors::into_status_error, requests::BookRequest, responses::BookResponse},
    extensions::*,
};

/// Update Book Handler
///
/// Overwrites every writable field of the book.
#[endpoint(
    tags("books"),
    summary = "Update Book",
    responses(
        (status_code = StatusCode::OK, description = "Book updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Book not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<BookRequest>,
    depot: &mut Depot,
) -> Result<Json<BookResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let book = state
        .books
        .update_book(id.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(book.into()))
}
