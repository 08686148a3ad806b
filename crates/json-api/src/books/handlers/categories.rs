//! Categories Handler

use salvo::prelude::*;

use crate::{books::errors::into_status_error, extensions::*};

/// Categories Handler
///
/// Returns the distinct, non-empty book categories in ascending order.
#[endpoint(
    tags("books"),
    summary = "List Categories",
    responses(
        (status_code = StatusCode::OK, description = "Categories"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<String>>, StatusError> {
    let state = depot.state_or_500()?;

    let categories = state
        .books
        .list_categories()
        .await
        .map_err(into_status_error)?;

    Ok(Json(categories))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use bookstore_app::domain::books::MockBooksService;

    use crate::test_helpers::books_service;

    use super::*;

    #[tokio::test]
    async fn test_categories_returns_array() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_list_categories()
            .once()
            .return_once(|| Ok(vec!["fantasy".to_string(), "history".to_string()]));

        let body: Vec<String> = TestClient::get("http://example.com/categories")
            .send(&books_service(
                books,
                Router::with_path("categories").get(handler),
            ))
            .await
            .take_json()
            .await?;

        assert_eq!(body, ["fantasy", "history"]);

        Ok(())
    }
}
