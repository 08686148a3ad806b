//! Search Books Handler

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    books::{errors::into_status_error, responses::BookResponse},
    extensions::*,
};

/// Search Books Handler
///
/// Case-insensitive substring match on title or author.
#[endpoint(
    tags("books"),
    summary = "Search Books",
    responses(
        (status_code = StatusCode::OK, description = "Matching books"),
        (status_code = StatusCode::BAD_REQUEST, description = "Missing keyword"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    q: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<BookResponse>>, StatusError> {
    let Some(keyword) = q.into_inner().filter(|keyword| !keyword.is_empty()) else {
        return Err(StatusError::bad_request().brief("keyword is required"));
    };

    let state = depot.state_or_500()?;

    let books = state
        .books
        .search_books(keyword)
        .await
        .map_err(into_status_error)?;

    Ok(Json(books.into_iter().map(Into::into).collect()))
}
