//! Entity model for the library
//!
//! Plain data records for authors and books, plus the envelope
//! collections used as request and response payloads.

mod author;
mod book;
mod envelope;

pub use author::{Author, AuthorId};
pub use book::{Book, BookId, MAX_DESCRIPTION_LEN};
pub use envelope::{Authors, Books};
