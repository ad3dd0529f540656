//! Book create, update, delete and queries

use crate::model::{AuthorId, Book, BookId, Books};
use crate::storage::{Session, Store};

use super::errors::{CatalogError, CatalogResult};
use super::validation::{check_book_payload, confirm_author_exists};
use super::Catalog;

impl<S: Store> Catalog<S> {
    /// Add a new book and return its assigned id.
    ///
    /// The payload must not carry an id, and every listed author must
    /// already exist with a matching name. No write happens unless all
    /// checks pass.
    pub fn create_book(&self, book: Book) -> CatalogResult<BookId> {
        if book.id.is_some() {
            return Err(CatalogError::invalid("Book must not have an id when created."));
        }
        check_book_payload(&book)?;

        let mut tx = self.store.begin()?;
        for author in &book.authors {
            confirm_author_exists(&tx, author)?;
        }
        let id = tx.persist_book(&book)?;
        tx.commit()?;
        Ok(id)
    }

    /// Replace a book, including its author list.
    ///
    /// Payload checks run first, then the target book must exist, then the
    /// authors are checked against storage.
    pub fn update_book(&self, book: Book) -> CatalogResult<()> {
        let id = book
            .id
            .ok_or_else(|| CatalogError::invalid("Book must have id field set."))?;
        check_book_payload(&book)?;

        let mut tx = self.store.begin()?;
        if tx.find_book(id)?.is_none() {
            return Err(CatalogError::NotFound);
        }
        for author in &book.authors {
            confirm_author_exists(&tx, author)?;
        }
        tx.merge_book(&book)?;
        tx.commit()?;
        Ok(())
    }

    /// Remove a book and its associations. Authors are kept.
    pub fn delete_book(&self, id: BookId) -> CatalogResult<()> {
        let mut tx = self.store.begin()?;
        if tx.find_book(id)?.is_none() {
            return Err(CatalogError::NotFound);
        }
        tx.remove_book(id)?;
        tx.commit()?;
        Ok(())
    }

    pub fn get_book(&self, id: BookId) -> CatalogResult<Book> {
        let tx = self.store.begin()?;
        tx.find_book(id)?.ok_or(CatalogError::NotFound)
    }

    pub fn all_books(&self) -> CatalogResult<Books> {
        let tx = self.store.begin()?;
        Ok(tx.all_books()?.into())
    }

    /// Books associated with the author. Unknown authors yield an empty list.
    pub fn books_by_author(&self, author_id: AuthorId) -> CatalogResult<Books> {
        let tx = self.store.begin()?;
        Ok(tx.books_by_author(author_id)?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Author;
    use crate::storage::MemoryStore;

    fn catalog() -> Catalog<MemoryStore> {
        Catalog::new(MemoryStore::new())
    }

    fn hitchhiker() -> Book {
        Book::new(
            "The Hitchhiker's Guide to the Galaxy",
            "Science fiction comedy book",
            "1-84023-742-2",
            354,
        )
    }

    #[test]
    fn test_create_then_get_round_trip() {
        let catalog = catalog();
        let author_id = catalog.create_author(Author::new("Douglas Adams")).unwrap();
        let book = hitchhiker().with_author(Author::with_id(author_id, "Douglas Adams"));

        let id = catalog.create_book(book.clone()).unwrap();
        let stored = catalog.get_book(id).unwrap();

        assert_eq!(stored, Book { id: Some(id), ..book });
    }

    #[test]
    fn test_create_rejects_preset_id() {
        let catalog = catalog();
        let id = catalog.create_book(hitchhiker()).unwrap();

        let mut duplicate = hitchhiker();
        duplicate.id = Some(id);
        assert!(matches!(
            catalog.create_book(duplicate),
            Err(CatalogError::InvalidRequest(_))
        ));
        assert_eq!(catalog.all_books().unwrap().len(), 1);
    }

    #[test]
    fn test_create_rejects_stale_author_without_writing() {
        let catalog = catalog();
        let author_id = catalog.create_author(Author::new("Douglas Adams")).unwrap();
        let book = hitchhiker().with_author(Author::with_id(author_id, "D. Adams"));

        assert!(matches!(
            catalog.create_book(book),
            Err(CatalogError::InvalidRequest(_))
        ));
        assert!(catalog.all_books().unwrap().is_empty());
    }

    #[test]
    fn test_update_replaces_fields() {
        let catalog = catalog();
        let id = catalog.create_book(hitchhiker()).unwrap();

        let updated = Book::with_id(id, "The Hitchhiker's Guide", "Science fiction comedy book", "1-84023-742-2", 354);
        catalog.update_book(updated).unwrap();

        assert_eq!(catalog.get_book(id).unwrap().title, "The Hitchhiker's Guide");
    }

    #[test]
    fn test_update_unknown_book() {
        let catalog = catalog();
        let book = Book::with_id(42, "T", "D", "ISBN", 1);
        assert_eq!(catalog.update_book(book), Err(CatalogError::NotFound));
    }

    #[test]
    fn test_update_unknown_book_with_missing_author_id_is_invalid() {
        let catalog = catalog();
        let book = Book::with_id(42, "T", "D", "ISBN", 1).with_author(Author::new("Ann"));
        assert!(matches!(
            catalog.update_book(book),
            Err(CatalogError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_update_requires_id() {
        let catalog = catalog();
        assert!(matches!(
            catalog.update_book(hitchhiker()),
            Err(CatalogError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_update_with_unknown_author_keeps_book() {
        let catalog = catalog();
        let id = catalog.create_book(hitchhiker()).unwrap();
        let mut book = catalog.get_book(id).unwrap();
        book.authors.push(Author::with_id(99, "Nobody"));

        assert!(catalog.update_book(book).is_err());
        assert!(catalog.get_book(id).unwrap().authors.is_empty());
    }

    #[test]
    fn test_delete_book_keeps_authors() {
        let catalog = catalog();
        let author_id = catalog.create_author(Author::new("Douglas Adams")).unwrap();
        let id = catalog
            .create_book(hitchhiker().with_author(Author::with_id(author_id, "Douglas Adams")))
            .unwrap();

        catalog.delete_book(id).unwrap();

        assert_eq!(catalog.get_book(id), Err(CatalogError::NotFound));
        assert!(catalog.get_author(author_id).is_ok());
        assert_eq!(catalog.delete_book(id), Err(CatalogError::NotFound));
    }

    #[test]
    fn test_books_by_author() {
        let catalog = catalog();
        let adams = catalog.create_author(Author::new("Douglas Adams")).unwrap();
        let lonely = catalog.create_author(Author::new("No Books")).unwrap();
        catalog
            .create_book(hitchhiker().with_author(Author::with_id(adams, "Douglas Adams")))
            .unwrap();
        catalog.create_book(Book::new("Other", "", "", 1)).unwrap();

        let books = catalog.books_by_author(adams).unwrap();
        assert_eq!(books.len(), 1);
        assert_eq!(books.get(0).unwrap().title, "The Hitchhiker's Guide to the Galaxy");
        assert!(catalog.books_by_author(lonely).unwrap().is_empty());
        assert!(catalog.books_by_author(12345).unwrap().is_empty());
    }
}
