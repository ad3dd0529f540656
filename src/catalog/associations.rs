//! Book ↔ author association operations

use crate::model::{Author, Authors, BookId};
use crate::storage::{Session, Store};

use super::errors::{CatalogError, CatalogResult};
use super::validation::attach_author;
use super::Catalog;

impl<S: Store> Catalog<S> {
    /// Current authors of a book
    pub fn authors_of_book(&self, book_id: BookId) -> CatalogResult<Authors> {
        let tx = self.store.begin()?;
        let book = tx.find_book(book_id)?.ok_or(CatalogError::NotFound)?;
        Ok(book.authors.into())
    }

    /// Attach one existing author to a book
    pub fn add_author_to_book(&self, book_id: BookId, author: Author) -> CatalogResult<()> {
        let mut tx = self.store.begin()?;
        let mut book = tx.find_book(book_id)?.ok_or(CatalogError::NotFound)?;

        attach_author(&tx, &mut book, author)?;
        tx.merge_book(&book)?;
        tx.commit()?;
        Ok(())
    }

    /// Replace a book's author list with the given sequence.
    ///
    /// The list is cleared and each author attached in order with the same
    /// checks as [`Catalog::add_author_to_book`]. The first failing author
    /// aborts the whole operation and the previous list stays in place. A
    /// repeated author is a failure, not silently deduplicated.
    pub fn replace_authors_of_book(&self, book_id: BookId, authors: Authors) -> CatalogResult<()> {
        let mut tx = self.store.begin()?;
        let mut book = tx.find_book(book_id)?.ok_or(CatalogError::NotFound)?;

        book.authors.clear();
        for author in authors {
            attach_author(&tx, &mut book, author)?;
        }
        tx.merge_book(&book)?;
        tx.commit()?;
        Ok(())
    }
}
