//! Delete Book Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    books::{errors::into_status_error, responses::BookDeletedResponse},
    extensions::*,
};

/// Delete Book Handler
#[endpoint(
    tags("books"),
    summary = "Delete Book",
    responses(
        (status_code = StatusCode::OK, description = "Book deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Book not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<BookDeletedResponse>, StatusError> {
    let state = depot.state_or_500()?;

    state
        .books
        .delete_book(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(BookDeletedResponse::default()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bookstore_app::domain::books::{BooksServiceError, MockBooksService, records::BookId};

    use crate::{errors::ErrorResponse, test_helpers::books_service};

    use super::*;

    fn make_service(books: MockBooksService) -> Service {
        books_service(books, Router::with_path("books/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_book_success() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_delete_book()
            .once()
            .withf(|id| *id == BookId::from_i64(3))
            .return_once(|_| Ok(()));

        books.expect_get_book().never();

        let mut res = TestClient::delete("http://example.com/books/3")
            .send(&make_service(books))
            .await;

        let body: BookDeletedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, "book deleted successfully");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_book_returns_404() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_delete_book()
            .once()
            .return_once(|_| Err(BooksServiceError::NotFound));

        let mut res = TestClient::delete("http://example.com/books/3")
            .send(&make_service(books))
            .await;

        let body: ErrorResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));
        assert_eq!(body.error, "book not found");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_invalid_id_returns_400() -> TestResult {
        let mut books = MockBooksService::new();

        books.expect_delete_book().never();

        let res = TestClient::delete("http://example.com/books/1.5")
            .send(&make_service(books))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
