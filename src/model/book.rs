//! Book entity

use serde::{Deserialize, Serialize};

use super::author::{Author, AuthorId};

/// Storage-assigned book identifier
pub type BookId = u64;

/// Maximum length of a book description, in characters
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// A book in the library
///
/// Field order is the wire order: `author`, `description`, `id`, `isbn`,
/// `nbOfPage`, `title`. The author list holds references to authors that
/// live independently of the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "author", default)]
    pub authors: Vec<Author>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
    #[serde(default)]
    pub isbn: String,
    #[serde(rename = "nbOfPage", default)]
    pub nb_of_page: i32,
    pub title: String,
}

impl Book {
    /// Create a transient book with no authors
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        isbn: impl Into<String>,
        nb_of_page: i32,
    ) -> Self {
        Self {
            authors: Vec::new(),
            description: description.into(),
            id: None,
            isbn: isbn.into(),
            nb_of_page,
            title: title.into(),
        }
    }

    /// Create a book with a known id, for full-replace updates
    pub fn with_id(
        id: BookId,
        title: impl Into<String>,
        description: impl Into<String>,
        isbn: impl Into<String>,
        nb_of_page: i32,
    ) -> Self {
        Self {
            id: Some(id),
            ..Self::new(title, description, isbn, nb_of_page)
        }
    }

    /// Append an author reference (builder style)
    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }

    /// Whether the author list already holds an author with this id
    pub fn has_author(&self, id: AuthorId) -> bool {
        self.authors.iter().any(|author| author.id == Some(id))
    }
}
