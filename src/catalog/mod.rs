//! # Catalog
//!
//! Book and author operations, including management of the many-to-many
//! association between them. Each public operation opens one transaction,
//! runs every check inside it, and commits only when all checks passed.
//! A failed operation drops its transaction, so nothing it staged becomes
//! visible.
//!
//! Author references supplied by clients are never trusted: each one is
//! re-fetched by id and must match the stored author exactly (id and name)
//! at the moment it is attached.

mod associations;
mod authors;
mod books;
mod errors;
pub mod sample_data;
mod validation;

pub use errors::{CatalogError, CatalogResult};

use crate::storage::Store;

/// Catalog of books and authors over a store
#[derive(Debug)]
pub struct Catalog<S: Store> {
    store: S,
}

impl<S: Store> Catalog<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
