//! Book Responses

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bookstore_app::domain::books::records::BookRecord;

/// Book Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookResponse {
    /// Store-assigned identifier
    pub id: i64,

    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,

    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    pub category: String,

    /// Omitted when the book has no original price
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[salvo(schema(value_type = Option<f64>))]
    pub original_price: Option<Decimal>,

    pub discount: i32,
    pub cover_image: String,

    #[salvo(schema(value_type = f64))]
    pub rating: Decimal,

    pub reviews_count: i32,
    pub is_new: bool,

    /// Omitted when the page count is unknown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,

    pub language: String,
    pub publisher: String,
    pub description: String,

    /// RFC 3339 creation time
    pub created_at: String,

    /// RFC 3339 time of the last update
    pub updated_at: String,
}

impl From<BookRecord> for BookResponse {
    fn from(record: BookRecord) -> Self {
        let book = record.book;

        BookResponse {
            id: record.id.into_i64(),
            title: book.title,
            author: book.author,
            isbn: book.isbn,
            year: book.year,
            price: book.price,
            category: book.category,
            original_price: book.original_price,
            discount: book.discount,
            cover_image: book.cover_image,
            rating: book.rating,
            reviews_count: book.reviews_count,
            is_new: book.is_new,
            pages: book.pages,
            language: book.language,
            publisher: book.publisher,
            description: book.description,
            created_at: record.created_at.to_string(),
            updated_at: record.updated_at.to_string(),
        }
    }
}

/// Book Deleted Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookDeletedResponse {
    pub message: String,
}

impl Default for BookDeletedResponse {
    fn default() -> Self {
        Self {
            message: "book deleted successfully".to_string(),
        }
    }
}
