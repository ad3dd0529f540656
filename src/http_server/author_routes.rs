//! Author HTTP Routes

use std::sync::Arc;

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    response::Response,
    routing::get,
    Json, Router,
};

use crate::catalog::Catalog;
use crate::model::{Author, Authors};
use crate::storage::Store;

use super::errors::RestResult;
use super::extract::{EntityId, Payload};
use super::response::created;

/// Create author routes
pub fn author_routes<S: Store>(catalog: Arc<Catalog<S>>) -> Router {
    Router::new()
        .route(
            "/authors",
            get(list_authors::<S>)
                .post(create_author::<S>)
                .put(update_author::<S>),
        )
        .route("/authors/:id", get(get_author::<S>).delete(delete_author::<S>))
        .with_state(catalog)
}

async fn create_author<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    OriginalUri(uri): OriginalUri,
    Payload(author): Payload<Author>,
) -> RestResult<Response> {
    let id = catalog.create_author(author)?;
    Ok(created(&uri, id))
}

async fn update_author<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    Payload(author): Payload<Author>,
) -> RestResult<StatusCode> {
    catalog.update_author(author)?;
    Ok(StatusCode::OK)
}

async fn list_authors<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
) -> RestResult<Json<Authors>> {
    Ok(Json(catalog.all_authors()?))
}

async fn get_author<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    EntityId(id): EntityId,
) -> RestResult<Json<Author>> {
    Ok(Json(catalog.get_author(id)?))
}

async fn delete_author<S: Store>(
    State(catalog): State<Arc<Catalog<S>>>,
    EntityId(id): EntityId,
) -> RestResult<StatusCode> {
    catalog.delete_author(id)?;
    Ok(StatusCode::NO_CONTENT)
}
