//! Create Book Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    books::{errors::into_status_error, requests::BookRequest, responses::BookResponse},
    extensions::*,
};

/// Create Book Handler
#[endpoint(
    tags("books"),
    summary = "Create Book",
    responses(
        (status_code = StatusCode::CREATED, description = "Book created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<BookRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<BookResponse>, StatusError> {
    let state = depot.state_or_500()?;

    let book = state
        .books
        .create_book(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/v1/books/{}", book.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(book.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use bookstore_app::domain::books::{
        BooksServiceError, MockBooksService, records::BookRecord,
    };

    use crate::test_helpers::{books_service, dune, make_book};

    use super::*;

    fn make_service(books: MockBooksService) -> Service {
        books_service(books, Router::with_path("books").post(handler))
    }

    #[tokio::test]
    async fn test_create_book_returns_201() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_create_book()
            .once()
            .withf(|book| *book == dune())
            .return_once(|book| {
                Ok(BookRecord {
                    book,
                    ..make_book(42)
                })
            });

        books.expect_get_book().never();
        books.expect_update_book().never();

        let mut res = TestClient::post("http://example.com/books")
            .json(&json!({
                "title": "Dune",
                "author": "Herbert",
                "isbn": "123",
                "year": 1965,
                "price": 9.99,
            }))
            .send(&make_service(books))
            .await;

        let body: BookResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some("/api/v1/books/42"));
        assert_eq!(body.id, 42);
        assert_eq!(body.title, "Dune");
        assert_eq!(body.original_price, None);
        assert!(!body.created_at.is_empty(), "created_at should be set");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_book_omitted_original_price_is_absent() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_create_book()
            .once()
            .return_once(|book| {
                Ok(BookRecord {
                    book,
                    ..make_book(1)
                })
            });

        let mut res = TestClient::post("http://example.com/books")
            .json(&json!({
                "title": "Dune",
                "author": "Herbert",
                "isbn": "123",
                "year": 1965,
                "price": 9.99,
            }))
            .send(&make_service(books))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert!(body.get("original_price").is_none(), "original_price leaked");
        assert!(body.get("pages").is_none(), "pages leaked");

        Ok(())
    }

    #[tokio::test]
    async fn test_create_book_malformed_body_returns_400() -> TestResult {
        let mut books = MockBooksService::new();

        books.expect_create_book().never();

        let res = TestClient::post("http://example.com/books")
            .json(&json!({ "title": "Dune", "year": "nineteen sixty-five" }))
            .send(&make_service(books))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_book_store_error_returns_500() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_create_book()
            .once()
            .return_once(|_| Err(BooksServiceError::Sql(sqlx::Error::PoolTimedOut)));

        let res = TestClient::post("http://example.com/books")
            .json(&json!({
                "title": "Dune",
                "author": "Herbert",
                "isbn": "123",
                "year": 1965,
                "price": 9.99,
            }))
            .send(&make_service(books))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
