//! App Router

use salvo::{
    Router,
    cors::{AllowOrigin, Cors, CorsHandler},
    http::{Method, header},
};

use crate::{books, healthcheck};

/// Catalog routes under `/api/v1` plus the root health probe.
pub fn app_router() -> Router {
    Router::new()
        .push(Router::with_path("health").get(healthcheck::handler))
        .push(
            Router::with_path("api/v1")
                .push(Router::with_path("categories").get(books::categories::handler))
                .push(
                    Router::with_path("books")
                        .get(books::index::handler)
                        .post(books::create::handler)
                        .push(Router::with_path("search").get(books::search::handler))
                        .push(Router::with_path("featured").get(books::views::featured))
                        .push(Router::with_path("new").get(books::views::new))
                        .push(Router::with_path("discounted").get(books::views::discounted))
                        .push(
                            Router::with_path("{id}")
                                .get(books::get::handler)
                                .put(books::update::handler)
                                .delete(books::delete::handler),
                        ),
                ),
        )
}

/// Any origin; the methods and headers a browser client needs.
pub fn cors() -> CorsHandler {
    Cors::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers(vec![
            header::ORIGIN,
            header::CONTENT_LENGTH,
            header::CONTENT_TYPE,
        ])
        .into_handler()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::{
        affix_state::inject,
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use bookstore_app::domain::{
        books::{MockBooksService, data::BookView, records::BookId},
        health::MockHealthService,
    };

    use crate::{errors::json_errors, state::State, test_helpers::make_book};

    use super::*;

    fn make_service(books: MockBooksService) -> Service {
        let state = State::new(Arc::new(books), Arc::new(MockHealthService::new()));

        Service::new(Router::new().hoop(inject(Arc::new(state))).push(app_router()))
            .hoop(cors())
            .hoop(json_errors)
    }

    #[tokio::test]
    async fn static_book_paths_win_over_id() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_view_books()
            .once()
            .withf(|view| *view == BookView::New)
            .return_once(|_| Ok(vec![]));

        books.expect_get_book().never();

        let res = TestClient::get("http://example.com/api/v1/books/new")
            .send(&make_service(books))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn numeric_id_routes_to_get() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_get_book()
            .once()
            .withf(|id| *id == BookId::from_i64(12))
            .return_once(|_| Ok(make_book(12)));

        let body: serde_json::Value = TestClient::get("http://example.com/api/v1/books/12")
            .send(&make_service(books))
            .await
            .take_json()
            .await?;

        assert_eq!(body.get("id"), Some(&serde_json::json!(12)));

        Ok(())
    }

    #[tokio::test]
    async fn responses_allow_any_origin() -> TestResult {
        let mut books = MockBooksService::new();

        books
            .expect_list_categories()
            .once()
            .return_once(|| Ok(vec![]));

        let res = TestClient::get("http://example.com/api/v1/categories")
            .add_header("origin", "http://localhost:3000", true)
            .send(&make_service(books))
            .await;

        let allow_origin = res
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(allow_origin, Some("*"));

        Ok(())
    }
}
