//! Author create, update, delete and queries

use crate::model::{Author, AuthorId, Authors};
use crate::storage::{Session, Store};

use super::errors::{CatalogError, CatalogResult};
use super::Catalog;

impl<S: Store> Catalog<S> {
    /// Add a new author and return its assigned id
    pub fn create_author(&self, author: Author) -> CatalogResult<AuthorId> {
        if author.id.is_some() {
            return Err(CatalogError::invalid("Author must not have an id when created."));
        }

        let mut tx = self.store.begin()?;
        let id = tx.persist_author(&author)?;
        tx.commit()?;
        Ok(id)
    }

    /// Rename an existing author in place
    pub fn update_author(&self, author: Author) -> CatalogResult<()> {
        let id = author
            .id
            .ok_or_else(|| CatalogError::invalid("Author must have id field set."))?;

        let mut tx = self.store.begin()?;
        if tx.find_author(id)?.is_none() {
            return Err(CatalogError::NotFound);
        }
        tx.merge_author(&author)?;
        tx.commit()?;
        Ok(())
    }

    /// Remove an author that no book references any more
    pub fn delete_author(&self, id: AuthorId) -> CatalogResult<()> {
        let mut tx = self.store.begin()?;
        if tx.find_author(id)?.is_none() {
            return Err(CatalogError::NotFound);
        }

        let referencing = tx.books_by_author(id)?.len();
        if referencing > 0 {
            return Err(CatalogError::invalid(format!(
                "Author is still author of {} book(s).",
                referencing
            )));
        }
        tx.remove_author(id)?;
        tx.commit()?;
        Ok(())
    }

    pub fn get_author(&self, id: AuthorId) -> CatalogResult<Author> {
        let tx = self.store.begin()?;
        tx.find_author(id)?.ok_or(CatalogError::NotFound)
    }

    /// All authors in natural order (by name)
    pub fn all_authors(&self) -> CatalogResult<Authors> {
        let tx = self.store.begin()?;
        let mut authors = tx.all_authors()?;
        authors.sort_by(Author::cmp_by_name);
        Ok(authors.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;
    use crate::storage::MemoryStore;

    fn catalog() -> Catalog<MemoryStore> {
        Catalog::new(MemoryStore::new())
    }

    #[test]
    fn test_create_update_delete() {
        let catalog = catalog();
        let id = catalog.create_author(Author::new("Douglas Adams")).unwrap();

        catalog
            .update_author(Author::with_id(id, "Updated author name"))
            .unwrap();
        assert_eq!(catalog.get_author(id).unwrap().name, "Updated author name");

        catalog.delete_author(id).unwrap();
        assert_eq!(catalog.get_author(id), Err(CatalogError::NotFound));
    }

    #[test]
    fn test_create_rejects_preset_id() {
        let catalog = catalog();
        assert!(matches!(
            catalog.create_author(Author::with_id(1, "Ann")),
            Err(CatalogError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_update_unknown_or_missing_id() {
        let catalog = catalog();
        assert_eq!(
            catalog.update_author(Author::with_id(9, "Ann")),
            Err(CatalogError::NotFound)
        );
        assert!(matches!(
            catalog.update_author(Author::new("Ann")),
            Err(CatalogError::InvalidRequest(_))
        ));
    }

    #[test]
    fn test_delete_referenced_author_is_rejected() {
        let catalog = catalog();
        let id = catalog.create_author(Author::new("Neil Gaiman")).unwrap();
        let book_id = catalog
            .create_book(
                Book::new("Coraline", "", "0-06-113937-8", 163)
                    .with_author(Author::with_id(id, "Neil Gaiman")),
            )
            .unwrap();

        assert!(matches!(
            catalog.delete_author(id),
            Err(CatalogError::InvalidRequest(_))
        ));

        catalog.delete_book(book_id).unwrap();
        catalog.delete_author(id).unwrap();
    }

    #[test]
    fn test_all_authors_sorted_by_name() {
        let catalog = catalog();
        for name in ["Terry Pratchett", "Arthur C. Clarke", "Neil Gaiman"] {
            catalog.create_author(Author::new(name)).unwrap();
        }

        let names: Vec<String> = catalog
            .all_authors()
            .unwrap()
            .into_iter()
            .map(|a| a.name)
            .collect();
        assert_eq!(names, ["Arthur C. Clarke", "Neil Gaiman", "Terry Pratchett"]);
    }
}
