//! library-rest - a books and authors catalog served over a JSON REST API
//!
//! - `model`: Book, Author and their collection envelopes
//! - `storage`: transactional tables with key and foreign-key checks
//! - `catalog`: CRUD and book ↔ author association rules
//! - `http_server`: axum routes over the catalog

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod model;
pub mod observability;
pub mod storage;
