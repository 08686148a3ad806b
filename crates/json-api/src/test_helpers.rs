//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use rust_decimal::Decimal;
use salvo::{affix_state::inject, prelude::*};

use bookstore_app::domain::{
    books::{
        MockBooksService,
        data::BookData,
        records::{BookId, BookRecord},
    },
    health::MockHealthService,
};

use crate::{errors::json_errors, state::State};

pub(crate) fn dune() -> BookData {
    BookData {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        isbn: "123".to_string(),
        year: 1965,
        price: Decimal::new(999, 2),
        ..BookData::default()
    }
}

pub(crate) fn make_book(id: i64) -> BookRecord {
    BookRecord {
        id: BookId::from_i64(id),
        book: dune(),
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

fn strict_health_mock() -> MockHealthService {
    let mut health = MockHealthService::new();

    health.expect_check().never();

    health
}

fn strict_books_mock() -> MockBooksService {
    let mut books = MockBooksService::new();

    books.expect_list_books().never();
    books.expect_get_book().never();
    books.expect_create_book().never();
    books.expect_update_book().never();
    books.expect_delete_book().never();
    books.expect_list_categories().never();
    books.expect_search_books().never();
    books.expect_view_books().never();

    books
}

fn service(state: State, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(Arc::new(state))).push(route)).hoop(json_errors)
}

pub(crate) fn books_service(books: MockBooksService, route: Router) -> Service {
    service(
        State::new(Arc::new(books), Arc::new(strict_health_mock())),
        route,
    )
}

pub(crate) fn health_service(health: MockHealthService, route: Router) -> Service {
    service(
        State::new(Arc::new(strict_books_mock()), Arc::new(health)),
        route,
    )
}
