//! Relational tables and write operations
//!
//! Three tables: `authors`, `books` and the association table
//! `book_has_author`, whose rows are kept per book in position order.
//! Books are materialized by joining their association rows against
//! `authors`, so a renamed author shows up renamed in every book.

use std::collections::BTreeMap;

use crate::model::{Author, AuthorId, Book, BookId, MAX_DESCRIPTION_LEN};

use super::errors::{StorageError, StorageResult};

pub const AUTHORS: &str = "authors";
pub const BOOKS: &str = "books";
pub const BOOK_HAS_AUTHOR: &str = "book_has_author";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorRow {
    pub name: String,
}

impl From<&Author> for AuthorRow {
    fn from(author: &Author) -> Self {
        Self {
            name: author.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRow {
    pub title: String,
    pub description: String,
    pub isbn: String,
    pub nb_of_page: i32,
}

impl From<&Book> for BookRow {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            description: book.description.clone(),
            isbn: book.isbn.clone(),
            nb_of_page: book.nb_of_page,
        }
    }
}

/// A single row-level write, staged in a transaction and replayed on commit
#[derive(Debug, Clone)]
pub enum WriteOp {
    InsertAuthor {
        id: AuthorId,
        row: AuthorRow,
    },
    UpdateAuthor {
        id: AuthorId,
        row: AuthorRow,
    },
    DeleteAuthor {
        id: AuthorId,
    },
    InsertBook {
        id: BookId,
        row: BookRow,
        author_ids: Vec<AuthorId>,
    },
    UpdateBook {
        id: BookId,
        row: BookRow,
        author_ids: Vec<AuthorId>,
    },
    DeleteBook {
        id: BookId,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Tables {
    authors: BTreeMap<AuthorId, AuthorRow>,
    books: BTreeMap<BookId, BookRow>,
    book_has_author: BTreeMap<BookId, Vec<AuthorId>>,
}

impl Tables {
    /// Apply one write, enforcing keys, foreign keys and column bounds.
    /// On error the tables are left untouched.
    pub fn apply(&mut self, op: &WriteOp) -> StorageResult<()> {
        match op {
            WriteOp::InsertAuthor { id, row } => {
                if self.authors.contains_key(id) {
                    return Err(StorageError::DuplicateKey { table: AUTHORS, id: *id });
                }
                self.authors.insert(*id, row.clone());
            }
            WriteOp::UpdateAuthor { id, row } => {
                let existing = self
                    .authors
                    .get_mut(id)
                    .ok_or(StorageError::RowNotFound { table: AUTHORS, id: *id })?;
                *existing = row.clone();
            }
            WriteOp::DeleteAuthor { id } => {
                if !self.authors.contains_key(id) {
                    return Err(StorageError::RowNotFound { table: AUTHORS, id: *id });
                }
                if self.book_has_author.values().any(|ids| ids.contains(id)) {
                    return Err(StorageError::ForeignKeyViolation {
                        table: BOOK_HAS_AUTHOR,
                        id: *id,
                    });
                }
                self.authors.remove(id);
            }
            WriteOp::InsertBook { id, row, author_ids } => {
                if self.books.contains_key(id) {
                    return Err(StorageError::DuplicateKey { table: BOOKS, id: *id });
                }
                self.check_book(row, author_ids)?;
                self.books.insert(*id, row.clone());
                self.book_has_author.insert(*id, author_ids.clone());
            }
            WriteOp::UpdateBook { id, row, author_ids } => {
                if !self.books.contains_key(id) {
                    return Err(StorageError::RowNotFound { table: BOOKS, id: *id });
                }
                self.check_book(row, author_ids)?;
                self.books.insert(*id, row.clone());
                self.book_has_author.insert(*id, author_ids.clone());
            }
            WriteOp::DeleteBook { id } => {
                if self.books.remove(id).is_none() {
                    return Err(StorageError::RowNotFound { table: BOOKS, id: *id });
                }
                self.book_has_author.remove(id);
            }
        }
        Ok(())
    }

    fn check_book(&self, row: &BookRow, author_ids: &[AuthorId]) -> StorageResult<()> {
        let len = row.description.chars().count();
        if len > MAX_DESCRIPTION_LEN {
            return Err(StorageError::ValueTooLong {
                column: "books.description",
                len,
                max: MAX_DESCRIPTION_LEN,
            });
        }

        for (position, id) in author_ids.iter().enumerate() {
            if !self.authors.contains_key(id) {
                return Err(StorageError::ForeignKeyViolation {
                    table: BOOK_HAS_AUTHOR,
                    id: *id,
                });
            }
            // (book_id, author_id) is the association's primary key
            if author_ids[..position].contains(id) {
                return Err(StorageError::DuplicateKey {
                    table: BOOK_HAS_AUTHOR,
                    id: *id,
                });
            }
        }
        Ok(())
    }

    pub fn author(&self, id: AuthorId) -> Option<Author> {
        self.authors
            .get(&id)
            .map(|row| Author::with_id(id, row.name.clone()))
    }

    pub fn authors(&self) -> Vec<Author> {
        self.authors
            .iter()
            .map(|(id, row)| Author::with_id(*id, row.name.clone()))
            .collect()
    }

    pub fn book(&self, id: BookId) -> StorageResult<Option<Book>> {
        self.books
            .get(&id)
            .map(|row| self.materialize(id, row))
            .transpose()
    }

    pub fn books(&self) -> StorageResult<Vec<Book>> {
        self.books
            .iter()
            .map(|(id, row)| self.materialize(*id, row))
            .collect()
    }

    /// Distinct books associated with the author, in book id order
    pub fn books_by_author(&self, author_id: AuthorId) -> StorageResult<Vec<Book>> {
        self.book_has_author
            .iter()
            .filter(|(_, ids)| ids.contains(&author_id))
            .filter_map(|(id, _)| self.books.get(id).map(|row| (*id, row)))
            .map(|(id, row)| self.materialize(id, row))
            .collect()
    }

    fn materialize(&self, id: BookId, row: &BookRow) -> StorageResult<Book> {
        let authors = self
            .book_has_author
            .get(&id)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|author_id| {
                self.author(*author_id)
                    .ok_or(StorageError::ForeignKeyViolation {
                        table: BOOK_HAS_AUTHOR,
                        id: *author_id,
                    })
            })
            .collect::<StorageResult<Vec<_>>>()?;

        Ok(Book {
            authors,
            description: row.description.clone(),
            id: Some(id),
            isbn: row.isbn.clone(),
            nb_of_page: row.nb_of_page,
            title: row.title.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author_row(name: &str) -> AuthorRow {
        AuthorRow {
            name: name.to_string(),
        }
    }

    fn book_row(title: &str) -> BookRow {
        BookRow {
            title: title.to_string(),
            description: String::new(),
            isbn: String::new(),
            nb_of_page: 100,
        }
    }

    fn seeded() -> Tables {
        let mut tables = Tables::default();
        for (id, name) in [(1, "Neil Gaiman"), (2, "Terry Pratchett")] {
            tables
                .apply(&WriteOp::InsertAuthor { id, row: author_row(name) })
                .unwrap();
        }
        tables
            .apply(&WriteOp::InsertBook {
                id: 10,
                row: book_row("Good Omens"),
                author_ids: vec![1, 2],
            })
            .unwrap();
        tables
            .apply(&WriteOp::InsertBook {
                id: 11,
                row: book_row("Guards! Guards!"),
                author_ids: vec![2],
            })
            .unwrap();
        tables
    }

    #[test]
    fn test_book_materializes_authors_in_position_order() {
        let tables = seeded();
        let book = tables.book(10).unwrap().unwrap();

        assert_eq!(book.title, "Good Omens");
        assert_eq!(
            book.authors,
            vec![
                Author::with_id(1, "Neil Gaiman"),
                Author::with_id(2, "Terry Pratchett")
            ]
        );
    }

    #[test]
    fn test_books_by_author_is_distinct() {
        let tables = seeded();

        let titles: Vec<String> = tables
            .books_by_author(2)
            .unwrap()
            .into_iter()
            .map(|b| b.title)
            .collect();
        assert_eq!(titles, ["Good Omens", "Guards! Guards!"]);
        assert!(tables.books_by_author(99).unwrap().is_empty());
    }

    #[test]
    fn test_delete_referenced_author_violates_foreign_key() {
        let mut tables = seeded();

        let err = tables.apply(&WriteOp::DeleteAuthor { id: 1 }).unwrap_err();
        assert_eq!(
            err,
            StorageError::ForeignKeyViolation {
                table: BOOK_HAS_AUTHOR,
                id: 1
            }
        );
        assert!(tables.author(1).is_some());
    }

    #[test]
    fn test_delete_book_keeps_authors() {
        let mut tables = seeded();

        tables.apply(&WriteOp::DeleteBook { id: 10 }).unwrap();
        tables.apply(&WriteOp::DeleteBook { id: 11 }).unwrap();

        assert!(tables.book(10).unwrap().is_none());
        assert_eq!(tables.authors().len(), 2);
        tables.apply(&WriteOp::DeleteAuthor { id: 1 }).unwrap();
    }

    #[test]
    fn test_insert_book_with_unknown_author() {
        let mut tables = seeded();

        let err = tables
            .apply(&WriteOp::InsertBook {
                id: 12,
                row: book_row("Neverwhere"),
                author_ids: vec![7],
            })
            .unwrap_err();
        assert!(matches!(err, StorageError::ForeignKeyViolation { id: 7, .. }));
        assert!(tables.book(12).unwrap().is_none());
    }

    #[test]
    fn test_duplicate_association_rejected() {
        let mut tables = seeded();

        let err = tables
            .apply(&WriteOp::UpdateBook {
                id: 11,
                row: book_row("Guards! Guards!"),
                author_ids: vec![2, 2],
            })
            .unwrap_err();
        assert!(matches!(err, StorageError::DuplicateKey { id: 2, .. }));
        assert_eq!(tables.book(11).unwrap().unwrap().authors.len(), 1);
    }

    #[test]
    fn test_description_length_bound() {
        let mut tables = Tables::default();
        let mut row = book_row("Long");
        row.description = "x".repeat(MAX_DESCRIPTION_LEN + 1);

        let err = tables
            .apply(&WriteOp::InsertBook {
                id: 1,
                row,
                author_ids: vec![],
            })
            .unwrap_err();
        assert!(matches!(err, StorageError::ValueTooLong { .. }));
    }

    #[test]
    fn test_author_rename_visible_through_books() {
        let mut tables = seeded();

        tables
            .apply(&WriteOp::UpdateAuthor {
                id: 1,
                row: author_row("N. Gaiman"),
            })
            .unwrap();

        let book = tables.book(10).unwrap().unwrap();
        assert_eq!(book.authors[0].name, "N. Gaiman");
    }
}
