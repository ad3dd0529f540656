//! Request extractors
//!
//! Thin wrappers over axum's `Json` and `Path` that report failures as
//! [`RestError`]s instead of axum's default rejections.

use axum::async_trait;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::errors::RestError;

/// JSON request body. A missing, malformed or mistyped body is a 400.
#[derive(Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Payload(value)),
            Err(rejection) => Err(RestError::InvalidBody(rejection.body_text())),
        }
    }
}

/// Numeric id from the single path parameter. Anything that does not
/// parse cannot name a stored entity, so it is a 404 rather than a 400.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub u64);

#[async_trait]
impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = RestError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| RestError::NotFound)?;
        raw.parse::<u64>()
            .map(EntityId)
            .map_err(|_| RestError::NotFound)
    }
}
