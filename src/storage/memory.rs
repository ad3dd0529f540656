//! In-memory relational store
//!
//! `begin` copies the committed tables into the transaction. Writes are
//! applied to that private copy right away, so constraint errors surface at
//! the call site, and recorded as [`WriteOp`]s. `commit` replays the log on
//! top of the latest committed tables under the write lock and swaps the
//! result in, so a commit is all-or-nothing. Concurrent commits touching the
//! same rows are last-writer-wins.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::model::{Author, AuthorId, Book, BookId};
use crate::observability::{Event, Logger};

use super::errors::{StorageError, StorageResult};
use super::tables::{AuthorRow, BookRow, Tables, WriteOp, AUTHORS, BOOKS};
use super::{Session, Store};

/// Shared in-memory store. Cloning yields another handle on the same data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    shared: Arc<Shared>,
}

#[derive(Debug, Default)]
struct Shared {
    tables: RwLock<Tables>,
    author_seq: AtomicU64,
    book_seq: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    // Sequences are never rolled back; ids of aborted inserts are skipped.
    fn next_author_id(&self) -> AuthorId {
        self.shared.author_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn next_book_id(&self) -> BookId {
        self.shared.book_seq.fetch_add(1, Ordering::SeqCst) + 1
    }
}

impl Store for MemoryStore {
    type Session = MemoryTransaction;

    fn begin(&self) -> StorageResult<MemoryTransaction> {
        let working = self
            .shared
            .tables
            .read()
            .map_err(|_| StorageError::LockPoisoned)?
            .clone();

        Ok(MemoryTransaction {
            store: self.clone(),
            working,
            pending: Vec::new(),
            committed: false,
        })
    }
}

/// Transaction handle on a [`MemoryStore`]
#[derive(Debug)]
pub struct MemoryTransaction {
    store: MemoryStore,
    working: Tables,
    pending: Vec<WriteOp>,
    committed: bool,
}

impl MemoryTransaction {
    fn stage(&mut self, op: WriteOp) -> StorageResult<()> {
        self.working.apply(&op)?;
        self.pending.push(op);
        Ok(())
    }

    /// Number of writes waiting for commit
    pub fn pending_writes(&self) -> usize {
        self.pending.len()
    }
}

fn author_ids_of(book: &Book) -> StorageResult<Vec<AuthorId>> {
    book.authors
        .iter()
        .map(|author| author.id.ok_or(StorageError::TransientReference { table: AUTHORS }))
        .collect()
}

impl Session for MemoryTransaction {
    fn find_author(&self, id: AuthorId) -> StorageResult<Option<Author>> {
        Ok(self.working.author(id))
    }

    fn all_authors(&self) -> StorageResult<Vec<Author>> {
        Ok(self.working.authors())
    }

    fn find_book(&self, id: BookId) -> StorageResult<Option<Book>> {
        self.working.book(id)
    }

    fn all_books(&self) -> StorageResult<Vec<Book>> {
        self.working.books()
    }

    fn books_by_author(&self, author_id: AuthorId) -> StorageResult<Vec<Book>> {
        self.working.books_by_author(author_id)
    }

    fn persist_author(&mut self, author: &Author) -> StorageResult<AuthorId> {
        let id = self.store.next_author_id();
        self.stage(WriteOp::InsertAuthor {
            id,
            row: AuthorRow::from(author),
        })?;
        Ok(id)
    }

    fn merge_author(&mut self, author: &Author) -> StorageResult<()> {
        let id = author.id.ok_or(StorageError::MissingId { table: AUTHORS })?;
        self.stage(WriteOp::UpdateAuthor {
            id,
            row: AuthorRow::from(author),
        })
    }

    fn remove_author(&mut self, id: AuthorId) -> StorageResult<()> {
        self.stage(WriteOp::DeleteAuthor { id })
    }

    fn persist_book(&mut self, book: &Book) -> StorageResult<BookId> {
        let author_ids = author_ids_of(book)?;
        let id = self.store.next_book_id();
        self.stage(WriteOp::InsertBook {
            id,
            row: BookRow::from(book),
            author_ids,
        })?;
        Ok(id)
    }

    fn merge_book(&mut self, book: &Book) -> StorageResult<()> {
        let id = book.id.ok_or(StorageError::MissingId { table: BOOKS })?;
        let author_ids = author_ids_of(book)?;
        self.stage(WriteOp::UpdateBook {
            id,
            row: BookRow::from(book),
            author_ids,
        })
    }

    fn remove_book(&mut self, id: BookId) -> StorageResult<()> {
        self.stage(WriteOp::DeleteBook { id })
    }

    fn commit(mut self) -> StorageResult<()> {
        if !self.pending.is_empty() {
            let mut tables = self
                .store
                .shared
                .tables
                .write()
                .map_err(|_| StorageError::LockPoisoned)?;

            let mut next = tables.clone();
            for op in &self.pending {
                next.apply(op)?;
            }
            *tables = next;
        }
        self.committed = true;
        Ok(())
    }
}

impl Drop for MemoryTransaction {
    fn drop(&mut self) {
        if !self.committed && !self.pending.is_empty() {
            let discarded = self.pending.len().to_string();
            Logger::trace(
                Event::TransactionRolledBack.as_str(),
                &[("discarded_writes", &discarded)],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_assigned_from_one() {
        let store = MemoryStore::new();
        let mut tx = store.begin().unwrap();

        assert_eq!(tx.persist_author(&Author::new("Ann")).unwrap(), 1);
        assert_eq!(tx.persist_author(&Author::new("Bob")).unwrap(), 2);
        assert_eq!(tx.persist_book(&Book::new("T", "D", "ISBN", 100)).unwrap(), 1);
        tx.commit().unwrap();
    }

    #[test]
    fn test_pending_writes_invisible_until_commit() {
        let store = MemoryStore::new();
        let mut tx = store.begin().unwrap();
        let id = tx.persist_author(&Author::new("Ann")).unwrap();

        assert!(tx.find_author(id).unwrap().is_some());
        assert!(store.begin().unwrap().find_author(id).unwrap().is_none());

        tx.commit().unwrap();
        assert_eq!(
            store.begin().unwrap().find_author(id).unwrap(),
            Some(Author::with_id(id, "Ann"))
        );
    }

    #[test]
    fn test_dropped_transaction_rolls_back() {
        let store = MemoryStore::new();
        {
            let mut tx = store.begin().unwrap();
            tx.persist_author(&Author::new("Ann")).unwrap();
            assert_eq!(tx.pending_writes(), 1);
        }

        assert!(store.begin().unwrap().all_authors().unwrap().is_empty());

        // The consumed id is not reused
        let mut tx = store.begin().unwrap();
        assert_eq!(tx.persist_author(&Author::new("Bob")).unwrap(), 2);
    }

    #[test]
    fn test_open_transaction_keeps_its_snapshot() {
        let store = MemoryStore::new();
        let mut setup = store.begin().unwrap();
        let author_id = setup.persist_author(&Author::new("Ann")).unwrap();
        let book = Book::new("T", "D", "ISBN", 100).with_author(Author::with_id(author_id, "Ann"));
        let book_id = setup.persist_book(&book).unwrap();
        setup.commit().unwrap();

        let mut writer = store.begin().unwrap();
        let mut cleared = writer.find_book(book_id).unwrap().unwrap();
        cleared.authors.clear();
        writer.merge_book(&cleared).unwrap();

        let reader = store.begin().unwrap();
        assert_eq!(reader.find_book(book_id).unwrap().unwrap().authors.len(), 1);

        writer.commit().unwrap();
        assert_eq!(reader.find_book(book_id).unwrap().unwrap().authors.len(), 1);
        assert!(store
            .begin()
            .unwrap()
            .find_book(book_id)
            .unwrap()
            .unwrap()
            .authors
            .is_empty());
    }

    #[test]
    fn test_persist_book_with_transient_author() {
        let store = MemoryStore::new();
        let mut tx = store.begin().unwrap();
        let book = Book::new("T", "D", "ISBN", 100).with_author(Author::new("Ann"));

        assert_eq!(
            tx.persist_book(&book).unwrap_err(),
            StorageError::TransientReference { table: AUTHORS }
        );
    }

    #[test]
    fn test_commit_fails_atomically_on_conflict() {
        let store = MemoryStore::new();
        let mut setup = store.begin().unwrap();
        let author_id = setup.persist_author(&Author::new("Ann")).unwrap();
        setup.commit().unwrap();

        // Attach the author in one transaction while another deletes it
        let mut attach = store.begin().unwrap();
        let book = Book::new("T", "D", "ISBN", 100).with_author(Author::with_id(author_id, "Ann"));
        attach.persist_author(&Author::new("Bob")).unwrap();
        attach.persist_book(&book).unwrap();

        let mut delete = store.begin().unwrap();
        delete.remove_author(author_id).unwrap();
        delete.commit().unwrap();

        assert!(matches!(
            attach.commit(),
            Err(StorageError::ForeignKeyViolation { .. })
        ));
        let tx = store.begin().unwrap();
        assert!(tx.all_books().unwrap().is_empty());
        assert!(tx.all_authors().unwrap().is_empty());
    }
}
