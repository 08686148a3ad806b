//! Dynamic book statements.
//!
//! Fixed statements live in `sql/`; only the filtered list and the writes built
//! from [`BookData::writable_fields`] are assembled here. Every caller-supplied
//! value is bound as a positional parameter.

use rust_decimal::Decimal;
use sqlx::{Postgres, QueryBuilder};

use crate::domain::books::{
    data::{BookData, BookFilter},
    records::BookId,
};

/// All `books` columns, in [`BookRow`](super::rows::BookRow) order.
pub(crate) const BOOK_COLUMNS: &str = "id, title, author, isbn, year, price, category, \
     original_price, discount, cover_image, rating, reviews_count, is_new, pages, language, \
     publisher, description, created_at, updated_at";

/// Columns assigned by the store on write.
pub(crate) const STAMP_COLUMNS: &str = "id, created_at, updated_at";

/// Maximum rows returned by a derived view.
pub(crate) const VIEW_LIMIT: i64 = 10;

/// Minimum rating for a book to be featured (4.5).
pub(crate) const FEATURED_MIN_RATING: Decimal = Decimal::from_parts(45, 0, 0, false, 1);

/// Appends `WHERE`/`AND` conjunctions as conditions are added.
struct Conditions<'b, 'args> {
    builder: &'b mut QueryBuilder<'args, Postgres>,
    empty: bool,
}

impl<'b, 'args> Conditions<'b, 'args> {
    fn new(builder: &'b mut QueryBuilder<'args, Postgres>) -> Self {
        Self {
            builder,
            empty: true,
        }
    }

    fn and(&mut self) -> &mut QueryBuilder<'args, Postgres> {
        self.builder
            .push(if self.empty { " WHERE " } else { " AND " });

        self.empty = false;

        self.builder
    }
}

fn select_books() -> QueryBuilder<'static, Postgres> {
    QueryBuilder::new(format!("SELECT {BOOK_COLUMNS} FROM books"))
}

pub(crate) fn list_books(filter: &BookFilter) -> QueryBuilder<'static, Postgres> {
    let mut builder = select_books();
    let mut conditions = Conditions::new(&mut builder);

    if let Some(category) = filter.category.as_deref().filter(|c| !c.is_empty()) {
        conditions
            .and()
            .push("category = ")
            .push_bind(category.to_owned());
    }

    builder.push(" ORDER BY id");

    builder
}

pub(crate) fn insert_book(book: &BookData) -> QueryBuilder<'static, Postgres> {
    let fields = book.writable_fields();
    let mut builder = QueryBuilder::new("INSERT INTO books (");

    let mut columns = builder.separated(", ");

    for (column, _) in &fields {
        columns.push(*column);
    }

    builder.push(") VALUES (");

    for (index, (_, value)) in fields.into_iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }

        value.push_bind(&mut builder);
    }

    builder.push(format!(") RETURNING {STAMP_COLUMNS}"));

    builder
}

pub(crate) fn update_book(book: BookId, update: &BookData) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("UPDATE books SET ");

    for (column, value) in update.writable_fields() {
        builder.push(column).push(" = ");
        value.push_bind(&mut builder);
        builder.push(", ");
    }

    builder
        .push("updated_at = now() WHERE id = ")
        .push_bind(book.into_i64())
        .push(format!(" RETURNING {STAMP_COLUMNS}"));

    builder
}

/// Wrap a keyword for a literal, case-insensitive `ILIKE` substring match.
pub(crate) fn contains_pattern(keyword: &str) -> String {
    let mut pattern = String::with_capacity(keyword.len() + 2);

    pattern.push('%');

    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }

        pattern.push(c);
    }

    pattern.push('%');

    pattern
}
