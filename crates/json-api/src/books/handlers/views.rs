//! Derived Book View Handlers
//!
//! Each view returns at most ten books.

use salvo::prelude::*;

use bookstore_app::domain::books::data::BookView;

use crate::{
    books::{errors::into_status_error, responses::BookResponse},
    extensions::*,
};

async fn view(depot: &Depot, view: BookView) -> Result<Json<Vec<BookResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let books = state
        .books
        .view_books(view)
        .await
        .map_err(into_status_error)?;

    Ok(Json(books.into_iter().map(Into::into).collect()))
}

/// Featured Books Handler
///
/// New or highly rated books, best rated first.
#[endpoint(tags("books"), summary = "Featured Books")]
pub(crate) async fn featured(depot: &mut Depot) -> Result<Json<Vec<BookResponse>>, StatusError> {
    view(depot, BookView::Featured).await
}

/// New Books Handler
///
/// New books, most recently added first.
#[endpoint(tags("books"), summary = "New Books")]
pub(crate) async fn new(depot: &mut Depot) -> Result<Json<Vec<BookResponse>>, StatusError> {
    view(depot, BookView::New).await
}

/// Discounted Books Handler
///
/// Discounted books, largest discount first.
#[endpoint(tags("books"), summary = "Discounted Books")]
pub(crate) async fn discounted(depot: &mut Depot) -> Result<Json<Vec<BookResponse>>, StatusError> {
    view(depot, BookView::Discounted).await
}
