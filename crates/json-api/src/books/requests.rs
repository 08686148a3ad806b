//! Book Requests

use rust_decimal::Decimal;
use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use bookstore_app::domain::books::data::BookData;

/// Create or Update Book Request
///
/// Unknown fields, including `id`, are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub(crate) struct BookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,

    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    #[salvo(schema(value_type = Option<f64>))]
    pub original_price: Option<Decimal>,

    #[serde(default)]
    pub discount: i32,

    #[serde(default)]
    pub cover_image: String,

    #[serde(default)]
    #[salvo(schema(value_type = f64))]
    pub rating: Decimal,

    #[serde(default)]
    pub reviews_count: i32,

    #[serde(default)]
    pub is_new: bool,

    #[serde(default)]
    pub pages: Option<i32>,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub publisher: String,

    #[serde(default)]
    pub description: String,
}

impl From<BookRequest> for BookData {
    fn from(request: BookRequest) -> Self {
        BookData {
            title: request.title,
            author: request.author,
            isbn: request.isbn,
            year: request.year,
            price: request.price,
            category: request.category,
            original_price: request.original_price,
            discount: request.discount,
            cover_image: request.cover_image,
            rating: request.rating,
            reviews_count: request.reviews_count,
            is_new: request.is_new,
            pages: request.pages,
            language: request.language,
            publisher: request.publisher,
            description: request.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn optional_fields_default_when_omitted() -> TestResult {
        let request: BookRequest = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "year": 1965,
            "price": 9.99,
        }))?;

        let book = BookData::from(request);

        assert_eq!(book.price, Decimal::new(999, 2));
        assert_eq!(book.category, "");
        assert_eq!(book.original_price, None);
        assert_eq!(book.pages, None);
        assert_eq!(book.rating, Decimal::ZERO);
        assert!(!book.is_new);

        Ok(())
    }

    #[test]
    fn payload_id_is_ignored() -> TestResult {
        let request: BookRequest = serde_json::from_value(json!({
            "id": 99,
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "year": 1965,
            "price": 10,
        }))?;

        assert_eq!(request.price, Decimal::from(10));

        Ok(())
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let result = serde_json::from_value::<BookRequest>(json!({
            "author": "Herbert",
            "isbn": "123",
            "year": 1965,
            "price": 9.99,
        }));

        assert!(result.is_err(), "title is required");
    }

    #[test]
    fn null_true_optionals_stay_absent() -> TestResult {
        let request: BookRequest = serde_json::from_value(json!({
            "title": "Dune",
            "author": "Herbert",
            "isbn": "123",
            "year": 1965,
            "price": 9.99,
            "original_price": null,
            "pages": null,
        }))?;

        assert_eq!(request.original_price, None);
        assert_eq!(request.pages, None);

        Ok(())
    }
}
