//! Test Helpers

use rust_decimal::Decimal;

use crate::{
    domain::books::{
        BooksService, BooksServiceError, data::BookData, records::BookRecord,
    },
    test::TestContext,
};

pub(crate) async fn make_book(
    ctx: &TestContext,
    title: &str,
    author: &str,
    category: &str,
) -> Result<BookRecord, BooksServiceError> {
    ctx.books
        .create_book(BookData {
            title: title.to_string(),
            author: author.to_string(),
            isbn: "9780000000000".to_string(),
            year: 2000,
            price: Decimal::new(1000, 2),
            category: category.to_string(),
            ..BookData::default()
        })
        .await
}
