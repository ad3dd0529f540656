//! Envelope collections
//!
//! `Authors` and `Books` only group entities for a single request or
//! response payload. They keep insertion order.

use serde::{Deserialize, Serialize};

use super::author::Author;
use super::book::Book;

macro_rules! envelope {
    ( $( $(#[$meta:meta])* $name:ident => $item:ty, $key:literal; )* ) => {
        $(
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            #[serde(rename = $key, default)]
            items: Vec<$item>,
        }

        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn push(&mut self, item: $item) {
                self.items.push(item);
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.items.get(index)
            }

            pub fn len(&self) -> usize {
                self.items.len()
            }

            pub fn is_empty(&self) -> bool {
                self.items.is_empty()
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.items.iter()
            }

            pub fn into_vec(self) -> Vec<$item> {
                self.items
            }
        }

        impl From<Vec<$item>> for $name {
            fn from(items: Vec<$item>) -> Self {
                Self { items }
            }
        }

        impl FromIterator<$item> for $name {
            fn from_iter<I: IntoIterator<Item = $item>>(iter: I) -> Self {
                Self { items: iter.into_iter().collect() }
            }
        }

        impl IntoIterator for $name {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<$item>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.items.iter()
            }
        }
        )*
    };
}

envelope! {
    /// Envelope for a list of authors, serialized as `{"author": [...]}`
    Authors => Author, "author";
    /// Envelope for a list of books, serialized as `{"book": [...]}`
    Books => Book, "book";
}
