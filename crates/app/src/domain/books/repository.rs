//! Books Repository

use sqlx::{PgPool, Postgres, query, query_as, query_scalar};

use crate::domain::books::{
    data::{BookData, BookFilter, BookView},
    query::{self as builders, FEATURED_MIN_RATING, VIEW_LIMIT},
    records::{BookId, BookRecord, BookStamps},
    rows::{BookRow, StampsRow},
};

const GET_BOOK_SQL: &str = include_str!("sql/get_book.sql");
const SEARCH_BOOKS_SQL: &str = include_str!("sql/search_books.sql");
const FEATURED_BOOKS_SQL: &str = include_str!("sql/featured_books.sql");
const NEW_BOOKS_SQL: &str = include_str!("sql/new_books.sql");
const DISCOUNTED_BOOKS_SQL: &str = include_str!("sql/discounted_books.sql");
const LIST_CATEGORIES_SQL: &str = include_str!("sql/list_categories.sql");
const DELETE_BOOK_SQL: &str = include_str!("sql/delete_book.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgBooksRepository;

impl PgBooksRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_books(
        &self,
        pool: &PgPool,
        filter: &BookFilter,
    ) -> Result<Vec<BookRecord>, sqlx::Error> {
        let mut builder = builders::list_books(filter);
        let rows = builder.build_query_as::<BookRow>().fetch_all(pool).await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub(crate) async fn get_book(
        &self,
        pool: &PgPool,
        book: BookId,
    ) -> Result<BookRecord, sqlx::Error> {
        let row = query_as::<Postgres, BookRow>(GET_BOOK_SQL)
            .bind(book.into_i64())
            .fetch_one(pool)
            .await?;

        Ok(row.into())
    }

    pub(crate) async fn search_books(
        &self,
        pool: &PgPool,
        keyword: &str,
    ) -> Result<Vec<BookRecord>, sqlx::Error> {
        let pattern = builders::contains_pattern(keyword);

        let rows = query_as::<Postgres, BookRow>(SEARCH_BOOKS_SQL)
            .bind(&pattern)
            .bind(&pattern)
            .fetch_all(pool)
            .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub(crate) async fn view_books(
        &self,
        pool: &PgPool,
        view: BookView,
    ) -> Result<Vec<BookRecord>, sqlx::Error> {
        let rows = match view {
            BookView::Featured => {
                query_as::<Postgres, BookRow>(FEATURED_BOOKS_SQL)
                    .bind(FEATURED_MIN_RATING)
                    .bind(VIEW_LIMIT)
                    .fetch_all(pool)
                    .await?
            }
            BookView::New => {
                query_as::<Postgres, BookRow>(NEW_BOOKS_SQL)
                    .bind(VIEW_LIMIT)
                    .fetch_all(pool)
                    .await?
            }
            BookView::Discounted => {
                query_as::<Postgres, BookRow>(DISCOUNTED_BOOKS_SQL)
                    .bind(VIEW_LIMIT)
                    .fetch_all(pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(Into::into).collect())
    }

    pub(crate) async fn list_categories(&self, pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        query_scalar::<Postgres, String>(LIST_CATEGORIES_SQL)
            .fetch_all(pool)
            .await
    }

    pub(crate) async fn create_book(
        &self,
        pool: &PgPool,
        book: &BookData,
    ) -> Result<BookStamps, sqlx::Error> {
        let mut builder = builders::insert_book(book);
        let stamps = builder.build_query_as::<StampsRow>().fetch_one(pool).await?;

        Ok(stamps.into())
    }

    /// Returns [`sqlx::Error::RowNotFound`] when no row matches.
    pub(crate) async fn update_book(
        &self,
        pool: &PgPool,
        book: BookId,
        update: &BookData,
    ) -> Result<BookStamps, sqlx::Error> {
        let mut builder = builders::update_book(book, update);
        let stamps = builder.build_query_as::<StampsRow>().fetch_one(pool).await?;

        Ok(stamps.into())
    }

    pub(crate) async fn delete_book(&self, pool: &PgPool, book: BookId) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_BOOK_SQL)
            .bind(book.into_i64())
            .execute(pool)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}
