//! # Response helpers

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};

/// `201 Created` with a `Location` pointing at the new resource, built
/// from the path the collection was posted to.
pub fn created(collection_uri: &Uri, id: u64) -> Response {
    let location = location_of(collection_uri, id);
    (StatusCode::CREATED, [(header::LOCATION, location)]).into_response()
}

fn location_of(collection_uri: &Uri, id: u64) -> String {
    format!("{}/{}", collection_uri.path().trim_end_matches('/'), id)
}
