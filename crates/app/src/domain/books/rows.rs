//! Book row mapping.
//!
//! Reads decode into [`BookRow`] and collapse nullable columns into
//! [`BookRecord`] defaults. Writes go through [`BookData::writable_fields`],
//! the one ordered column list shared by the insert and update statements.

use jiff_sqlx::Timestamp as SqlxTimestamp;
use rust_decimal::Decimal;
use sqlx::{FromRow, Postgres, QueryBuilder};

use crate::domain::books::{
    data::BookData,
    records::{BookId, BookRecord, BookStamps},
};

/// Number of columns written by insert and update.
pub(crate) const WRITABLE_COLUMN_COUNT: usize = 16;

/// A `books` row as stored, nullable columns included.
#[derive(FromRow)]
pub(crate) struct BookRow {
    pub(crate) id: i64,
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) isbn: String,
    pub(crate) year: i32,
    pub(crate) price: Decimal,
    pub(crate) category: Option<String>,
    pub(crate) original_price: Option<Decimal>,
    pub(crate) discount: Option<i32>,
    pub(crate) cover_image: Option<String>,
    pub(crate) rating: Option<Decimal>,
    pub(crate) reviews_count: Option<i32>,
    pub(crate) is_new: Option<bool>,
    pub(crate) pages: Option<i32>,
    pub(crate) language: Option<String>,
    pub(crate) publisher: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) created_at: SqlxTimestamp,
    pub(crate) updated_at: SqlxTimestamp,
}

impl From<BookRow> for BookRecord {
    fn from(row: BookRow) -> Self {
        Self {
            id: BookId::from_i64(row.id),
            book: BookData {
                title: row.title,
                author: row.author,
                isbn: row.isbn,
                year: row.year,
                price: row.price,
                category: row.category.unwrap_or_default(),
                original_price: row.original_price,
                discount: row.discount.unwrap_or_default(),
                cover_image: row.cover_image.unwrap_or_default(),
                rating: row.rating.unwrap_or_default(),
                reviews_count: row.reviews_count.unwrap_or_default(),
                is_new: row.is_new.unwrap_or_default(),
                pages: row.pages,
                language: row.language.unwrap_or_default(),
                publisher: row.publisher.unwrap_or_default(),
                description: row.description.unwrap_or_default(),
            },
            created_at: row.created_at.to_jiff(),
            updated_at: row.updated_at.to_jiff(),
        }
    }
}

/// `RETURNING id, created_at, updated_at`
#[derive(FromRow)]
pub(crate) struct StampsRow {
    pub(crate) id: i64,
    pub(crate) created_at: SqlxTimestamp,
    pub(crate) updated_at: SqlxTimestamp,
}

impl From<StampsRow> for BookStamps {
    fn from(row: StampsRow) -> Self {
        Self {
            id: BookId::from_i64(row.id),
            created_at: row.created_at.to_jiff(),
            updated_at: row.updated_at.to_jiff(),
        }
    }
}

/// A single bindable column value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum ColumnValue {
    Text(Option<String>),
    Integer(Option<i32>),
    Numeric(Option<Decimal>),
    Boolean(bool),
}

impl ColumnValue {
    /// Append this value as the next positional placeholder.
    pub(crate) fn push_bind(self, builder: &mut QueryBuilder<'_, Postgres>) {
        match self {
            Self::Text(value) => builder.push_bind(value),
            Self::Integer(value) => builder.push_bind(value),
            Self::Numeric(value) => builder.push_bind(value),
            Self::Boolean(value) => builder.push_bind(value),
        };
    }
}

impl BookData {
    /// Writable columns paired with their values, in placeholder order.
    pub(crate) fn writable_fields(&self) -> [(&'static str, ColumnValue); WRITABLE_COLUMN_COUNT] {
        [
            ("title", ColumnValue::Text(Some(self.title.clone()))),
            ("author", ColumnValue::Text(Some(self.author.clone()))),
            ("isbn", ColumnValue::Text(Some(self.isbn.clone()))),
            ("year", ColumnValue::Integer(Some(self.year))),
            ("price", ColumnValue::Numeric(Some(self.price))),
            ("category", nullable_text(&self.category)),
            ("original_price", ColumnValue::Numeric(self.original_price)),
            ("discount", ColumnValue::Integer(Some(self.discount))),
            ("cover_image", nullable_text(&self.cover_image)),
            ("rating", ColumnValue::Numeric(Some(self.rating))),
            ("reviews_count", ColumnValue::Integer(Some(self.reviews_count))),
            ("is_new", ColumnValue::Boolean(self.is_new)),
            ("pages", ColumnValue::Integer(self.pages)),
            ("language", nullable_text(&self.language)),
            ("publisher", nullable_text(&self.publisher)),
            ("description", nullable_text(&self.description)),
        ]
    }
}

// Empty strings are stored as NULL; reads collapse both back to "".
fn nullable_text(value: &str) -> ColumnValue {
    ColumnValue::Text((!value.is_empty()).then(|| value.to_owned()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn sparse_row() -> BookRow {
        BookRow {
            id: 7,
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            isbn: "123".to_string(),
            year: 1965,
            price: Decimal::new(999, 2),
            category: None,
            original_price: None,
            discount: None,
            cover_image: None,
            rating: None,
            reviews_count: None,
            is_new: None,
            pages: None,
            language: None,
            publisher: None,
            description: None,
            created_at: SqlxTimestamp::from(Timestamp::UNIX_EPOCH),
            updated_at: SqlxTimestamp::from(Timestamp::UNIX_EPOCH),
        }
    }

    #[test]
    fn null_columns_collapse_to_defaults() {
        let record = BookRecord::from(sparse_row());

        assert_eq!(record.id, BookId::from_i64(7));
        assert_eq!(record.book.category, "");
        assert_eq!(record.book.discount, 0);
        assert_eq!(record.book.cover_image, "");
        assert_eq!(record.book.rating, Decimal::ZERO);
        assert_eq!(record.book.reviews_count, 0);
        assert!(!record.book.is_new);
        assert_eq!(record.book.language, "");
        assert_eq!(record.book.publisher, "");
        assert_eq!(record.book.description, "");
    }

    #[test]
    fn true_optionals_stay_absent() {
        let record = BookRecord::from(sparse_row());

        assert_eq!(record.book.original_price, None);
        assert_eq!(record.book.pages, None);
    }

    #[test]
    fn true_optionals_keep_zero_values() {
        let mut row = sparse_row();

        row.original_price = Some(Decimal::ZERO);
        row.pages = Some(0);

        let record = BookRecord::from(row);

        assert_eq!(record.book.original_price, Some(Decimal::ZERO));
        assert_eq!(record.book.pages, Some(0));
    }

    #[test]
    fn writable_fields_follow_column_order() {
        let columns: Vec<&str> = BookData::default()
            .writable_fields()
            .iter()
            .map(|(column, _)| *column)
            .collect();

        assert_eq!(
            columns,
            [
                "title",
                "author",
                "isbn",
                "year",
                "price",
                "category",
                "original_price",
                "discount",
                "cover_image",
                "rating",
                "reviews_count",
                "is_new",
                "pages",
                "language",
                "publisher",
                "description",
            ]
        );
    }

    #[test]
    fn empty_text_is_written_as_null() {
        let book = BookData {
            title: "Dune".to_string(),
            category: String::new(),
            publisher: "Chilton".to_string(),
            ..BookData::default()
        };

        let fields = book.writable_fields();

        assert!(
            fields.contains(&("category", ColumnValue::Text(None))),
            "empty category should bind NULL"
        );
        assert!(
            fields.contains(&("publisher", ColumnValue::Text(Some("Chilton".to_string())))),
            "publisher should bind verbatim"
        );
        assert!(
            fields.contains(&("title", ColumnValue::Text(Some("Dune".to_string())))),
            "required text binds even when set"
        );
    }

    #[test]
    fn absent_optionals_are_written_as_null() {
        let fields = BookData::default().writable_fields();

        assert!(
            fields.contains(&("original_price", ColumnValue::Numeric(None))),
            "absent original_price should bind NULL"
        );
        assert!(
            fields.contains(&("pages", ColumnValue::Integer(None))),
            "absent pages should bind NULL"
        );
    }
}
