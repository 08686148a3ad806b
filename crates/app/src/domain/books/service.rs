//! Books service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    database::Db,
    domain::books::{
        data::{BookData, BookFilter, BookView},
        errors::BooksServiceError,
        records::{BookId, BookRecord},
        repository::PgBooksRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgBooksService {
    db: Db,
    repository: PgBooksRepository,
}

impl PgBooksService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgBooksRepository::new(),
        }
    }
}

#[async_trait]
impl BooksService for PgBooksService {
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<BookRecord>, BooksServiceError> {
        let books = self.repository.list_books(self.db.pool(), &filter).await?;

        Ok(books)
    }

    async fn get_book(&self, book: BookId) -> Result<BookRecord, BooksServiceError> {
        let book = self.repository.get_book(self.db.pool(), book).await?;

        Ok(book)
    }

    async fn create_book(&self, book: BookData) -> Result<BookRecord, BooksServiceError> {
        let stamps = self.repository.create_book(self.db.pool(), &book).await?;

        Ok(BookRecord::from_stamps(book, stamps))
    }

    async fn update_book(
        &self,
        book: BookId,
        update: BookData,
    ) -> Result<BookRecord, BooksServiceError> {
        let stamps = self
            .repository
            .update_book(self.db.pool(), book, &update)
            .await?;

        Ok(BookRecord::from_stamps(update, stamps))
    }

    async fn delete_book(&self, book: BookId) -> Result<(), BooksServiceError> {
        let rows_affected = self.repository.delete_book(self.db.pool(), book).await?;

        if rows_affected == 0 {
            return Err(BooksServiceError::NotFound);
        }

        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<String>, BooksServiceError> {
        let categories = self.repository.list_categories(self.db.pool()).await?;

        Ok(categories)
    }

    async fn search_books(&self, keyword: String) -> Result<Vec<BookRecord>, BooksServiceError> {
        if keyword.is_empty() {
            return Err(BooksServiceError::MissingKeyword);
        }

        let books = self
            .repository
            .search_books(self.db.pool(), &keyword)
            .await?;

        Ok(books)
    }

    async fn view_books(&self, view: BookView) -> Result<Vec<BookRecord>, BooksServiceError> {
        let books = self.repository.view_books(self.db.pool(), view).await?;

        Ok(books)
    }
}

#[automock]
#[async_trait]
pub trait BooksService: Send + Sync {
    /// Retrieves all books matching the filter, ordered by id.
    async fn list_books(&self, filter: BookFilter) -> Result<Vec<BookRecord>, BooksServiceError>;

    /// Retrieve a single book.
    async fn get_book(&self, book: BookId) -> Result<BookRecord, BooksServiceError>;

    /// Creates a book, returning the payload merged with its store-assigned id and timestamps.
    async fn create_book(&self, book: BookData) -> Result<BookRecord, BooksServiceError>;

    /// Overwrites every writable field of a book.
    async fn update_book(
        &self,
        book: BookId,
        update: BookData,
    ) -> Result<BookRecord, BooksServiceError>;

    /// Deletes a book with the given id.
    async fn delete_book(&self, book: BookId) -> Result<(), BooksServiceError>;

    /// Distinct non-null categories, sorted.
    async fn list_categories(&self) -> Result<Vec<String>, BooksServiceError>;

    /// Books whose title or author contains the keyword, ignoring case.
    async fn search_books(&self, keyword: String) -> Result<Vec<BookRecord>, BooksServiceError>;

    /// One of the fixed derived views.
    async fn view_books(&self, view: BookView) -> Result<Vec<BookRecord>, BooksServiceError>;
}
