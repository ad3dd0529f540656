//! Storage for the library
//!
//! A generic create/read/update/delete/query interface over authors and
//! books. Every access goes through an explicit transaction handle: the
//! caller opens it with [`Store::begin`], passes it down by reference, and
//! either commits it or drops it. Dropping an uncommitted handle discards
//! all of its writes.

mod errors;
mod memory;
mod tables;

pub use errors::{StorageError, StorageResult};
pub use memory::{MemoryStore, MemoryTransaction};

use crate::model::{Author, AuthorId, Book, BookId};

/// A store that hands out transaction-scoped sessions
pub trait Store: Send + Sync + 'static {
    type Session: Session;

    /// Open a new transaction
    fn begin(&self) -> StorageResult<Self::Session>;
}

/// A transaction-scoped handle on the store
///
/// Reads observe the transaction's own pending writes. Nothing is visible
/// to other sessions until [`Session::commit`].
pub trait Session {
    /// Look up an author by id
    fn find_author(&self, id: AuthorId) -> StorageResult<Option<Author>>;

    /// All authors, in id order
    fn all_authors(&self) -> StorageResult<Vec<Author>>;

    /// Look up a book by id, with its authors resolved
    fn find_book(&self, id: BookId) -> StorageResult<Option<Book>>;

    /// All books, in id order
    fn all_books(&self) -> StorageResult<Vec<Book>>;

    /// Distinct books associated with the author
    fn books_by_author(&self, author_id: AuthorId) -> StorageResult<Vec<Book>>;

    /// Insert a new author and return its assigned id. Any id on the
    /// argument is ignored.
    fn persist_author(&mut self, author: &Author) -> StorageResult<AuthorId>;

    /// Replace an existing author row
    fn merge_author(&mut self, author: &Author) -> StorageResult<()>;

    /// Delete an author row
    fn remove_author(&mut self, id: AuthorId) -> StorageResult<()>;

    /// Insert a new book with its association rows and return its assigned
    /// id. Every referenced author must carry an id.
    fn persist_book(&mut self, book: &Book) -> StorageResult<BookId>;

    /// Replace an existing book row and its association rows
    fn merge_book(&mut self, book: &Book) -> StorageResult<()>;

    /// Delete a book row and its association rows
    fn remove_book(&mut self, id: BookId) -> StorageResult<()>;

    /// Make all pending writes visible atomically
    fn commit(self) -> StorageResult<()>;
}
