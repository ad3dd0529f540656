//! Reference checks shared by the book and association operations
//!
//! Helpers that take a session never commit or drop it; the caller owns
//! the transaction.

use std::collections::HashSet;

use crate::model::{Author, Book, MAX_DESCRIPTION_LEN};
use crate::observability::{log_event_with_fields, Event};
use crate::storage::Session;

use super::errors::{CatalogError, CatalogResult};

/// Payload checks that need no storage access: every author carries an
/// id, no author id repeats, and the description fits its column.
pub(super) fn check_book_payload(book: &Book) -> CatalogResult<()> {
    if book.description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CatalogError::invalid(format!(
            "Book description exceeds {} characters.",
            MAX_DESCRIPTION_LEN
        )));
    }

    let mut seen = HashSet::new();
    for author in &book.authors {
        let id = author
            .id
            .ok_or_else(|| CatalogError::invalid("Book contained an author with no id field set."))?;
        if !seen.insert(id) {
            return Err(CatalogError::invalid(format!(
                "Book lists author {} more than once.",
                id
            )));
        }
    }
    Ok(())
}

/// Re-fetch the author and require an identity match with the given copy
pub(super) fn confirm_author_exists<T: Session>(tx: &T, author: &Author) -> CatalogResult<()> {
    let id = author
        .id
        .ok_or_else(|| CatalogError::invalid("Author must have id field set."))?;

    match tx.find_author(id)? {
        Some(stored) if stored.matches(author) => Ok(()),
        _ => Err(CatalogError::invalid("Author does not exist in database.")),
    }
}

/// Append an author to the book's list after the association checks:
/// id set, not already on the book, present and current in storage.
pub(super) fn attach_author<T: Session>(
    tx: &T,
    book: &mut Book,
    author: Author,
) -> CatalogResult<()> {
    let id = author
        .id
        .ok_or_else(|| CatalogError::invalid("Author must have id field set."))?;
    if book.has_author(id) {
        return Err(CatalogError::invalid("Author is already author of this book."));
    }
    confirm_author_exists(tx, &author)?;

    let author_id = id.to_string();
    let book_id = book.id.map(|id| id.to_string()).unwrap_or_default();
    log_event_with_fields(
        Event::AuthorAddedToBook,
        &[
            ("author_id", &author_id),
            ("book_id", &book_id),
            ("name", &author.name),
        ],
    );

    book.authors.push(author);
    Ok(())
}
