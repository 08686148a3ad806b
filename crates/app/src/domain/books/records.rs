//! Book Records

use jiff::Timestamp;

use crate::{domain::books::data::BookData, ids::TypedId};

/// Book Id
pub type BookId = TypedId<BookRecord>;

/// Book Record
#[derive(Debug, Clone, PartialEq)]
pub struct BookRecord {
    pub id: BookId,
    pub book: BookData,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identity and timestamps assigned by the store on write.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BookStamps {
    pub id: BookId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BookRecord {
    /// Merge store-assigned identity and timestamps into a submitted payload.
    #[must_use]
    pub fn from_stamps(book: BookData, stamps: BookStamps) -> Self {
        Self {
            id: stamps.id,
            book,
            created_at: stamps.created_at,
            updated_at: stamps.updated_at,
        }
    }
}
