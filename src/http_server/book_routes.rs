//! Book HTTP Routes
//!
//! `/books` collection, single books, the by-author listing and the
//! `/books/:id/authors` association endpoints.

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use crate::catalog::Catalog;
use crate::model::{Author, Authors, Book, Books};
use crate::storage::Store;

use super::errors::RestResult;
use super::extract::{EntityId, Payload};
use super::response::created;

// ==================
// Book Routes
// ==================

/// Create book routes
pub fn book_routes<S: Store>(catalog: Arc<Catalog<S>>) -> Router {
    Router::new()
        .route("/books", get(list_books::<S>).post(create_book::<S>).put(update_book::<S>))
        .route("/books/:id", get(get_book::<S>).delete(delete_book::<S>))
        .route("/books/byauthor/:id", get(books_by_author::<S>))
        .route(
            "/books/:id/authors",
            get(authors_of_book::<S>)
                .post(add_author_to_book::<S>)
                .put(replace_authors_of_book::<S>),
        )
        .with_state(catalog)
}

// ==================
// Book Handlers
// ==================

async fn create_book<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    OriginalUri(uri): OriginalUri,
    Payload(book): Payload<Book>,
) -> RestResult<Response> {
    let id = catalog.create_book(book)?;
    Ok(created(&uri, id))
}

async fn update_book<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    Payload(book): Payload<Book>,
) -> RestResult<StatusCode> {
    catalog.update_book(book)?;
    Ok(StatusCode::OK)
}

async fn list_books<S: Store>(State(catalog): State<Arc<Catalog<S>>>) -> RestResult<Json<Books>> {
    Ok(Json(catalog.all_books()?))
}

async fn get_book<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    EntityId(id): EntityId,
) -> RestResult<Json<Book>> {
    Ok(Json(catalog.get_book(id)?))
}

async fn delete_book<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    EntityId(id): EntityId,
) -> RestResult<StatusCode> {
    catalog.delete_book(id)?;
    Ok(StatusCode::NO_CONTENT)
}

async fn books_by_author<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    EntityId(author_id): EntityId,
) -> RestResult<Json<Books>> {
    Ok(Json(catalog.books_by_author(author_id)?))
}

// ==================
// Association Handlers
// ==================

async fn authors_of_book<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    EntityId(book_id): EntityId,
) -> RestResult<Json<Authors>> {
    Ok(Json(catalog.authors_of_book(book_id)?))
}

async fn add_author_to_book<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    EntityId(book_id): EntityId,
    Payload(author): Payload<Author>,
) -> RestResult<StatusCode> {
    catalog.add_author_to_book(book_id, author)?;
    Ok(StatusCode::OK)
}

async fn replace_authors_of_book<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    EntityId(book_id): EntityId,
    Payload(authors): Payload<Authors>,
) -> RestResult<StatusCode> {
    catalog.replace_authors_of_book(book_id, authors)?;
    Ok(StatusCode::OK)
}
