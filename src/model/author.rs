//! Author entity
//!
//! Authors are shared by many books. A book only ever holds an author by
//! reference, so the identity rules here decide whether a client-supplied
//! copy of an author is still current.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Storage-assigned author identifier
pub type AuthorId = u64;

/// An author in the library
///
/// Equality is an identity match: both `id` and `name` must coincide. A
/// copy carrying the right id but an outdated name is a different author
/// for comparison purposes, even though storage would update the same row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<AuthorId>,
    pub name: String,
}

impl Author {
    /// Create a transient author; storage assigns the id on first persist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Create an author with a known id, for updates and lookups
    pub fn with_id(id: AuthorId, name: impl Into<String>) -> Self {
        Self {
            id: Some(id),
            name: name.into(),
        }
    }

    /// Identity match: same id and same name
    pub fn matches(&self, other: &Author) -> bool {
        self.id == other.id && self.name == other.name
    }

    /// Natural ordering of authors, lexicographic by name
    pub fn cmp_by_name(&self, other: &Author) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl PartialEq for Author {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Eq for Author {}
