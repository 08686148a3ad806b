//! Books Data

use rust_decimal::Decimal;

/// Writable Book Data
///
/// Carried by both create and update; an update overwrites every field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookData {
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub year: i32,
    pub price: Decimal,
    pub category: String,
    pub original_price: Option<Decimal>,
    pub discount: i32,
    pub cover_image: String,
    pub rating: Decimal,
    pub reviews_count: i32,
    pub is_new: bool,
    pub pages: Option<i32>,
    pub language: String,
    pub publisher: String,
    pub description: String,
}

/// Book List Filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookFilter {
    /// Exact category match.
    pub category: Option<String>,
}

impl BookFilter {
    /// Build a filter from raw query input, treating empty values as absent.
    #[must_use]
    pub fn new(category: Option<String>) -> Self {
        Self {
            category: category.filter(|category| !category.is_empty()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.category.is_none()
    }
}

/// Derived catalog views, each capped at a fixed number of rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookView {
    /// New or highly rated books, best rated first.
    Featured,

    /// New books, most recently added first.
    New,

    /// Discounted books, largest discount first.
    Discounted,
}
