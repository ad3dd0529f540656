//! Shared helpers for driving the router in-process

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;

use library_rest::catalog::Catalog;
use library_rest::http_server::{HttpServer, HttpServerConfig};
use library_rest::storage::MemoryStore;

pub fn app() -> Router {
    app_with(HttpServerConfig::default())
}

pub fn app_with(config: HttpServerConfig) -> Router {
    HttpServer::new(config, Catalog::new(MemoryStore::new())).router()
}

/// Response status, headers and parsed JSON body (Null when empty)
pub struct Reply {
    pub status: StatusCode,
    pub response: Response<()>,
    pub body: Value,
}

impl Reply {
    pub fn location(&self) -> String {
        self.response.headers()[header::LOCATION]
            .to_str()
            .unwrap()
            .to_string()
    }

    /// Trailing id of the Location header
    pub fn created_id(&self) -> u64 {
        self.location().rsplit('/').next().unwrap().parse().unwrap()
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    Reply {
        status: parts.status,
        response: Response::from_parts(parts, ()),
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> Reply {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> Reply {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> Reply {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Reply {
    send(app, Method::DELETE, uri, None).await
}

/// Create an author and return its id
pub async fn create_author(app: &Router, name: &str) -> u64 {
    let reply = post(app, "/rest/authors", serde_json::json!({ "name": name })).await;
    assert_eq!(reply.status, StatusCode::CREATED);
    reply.created_id()
}

/// Create a book without authors and return its id
pub async fn create_book(app: &Router, title: &str) -> u64 {
    let reply = post(
        app,
        "/rest/books",
        serde_json::json!({
            "title": title,
            "description": "Desc",
            "isbn": "ISBN",
            "nbOfPage": 100
        }),
    )
    .await;
    assert_eq!(reply.status, StatusCode::CREATED);
    reply.created_id()
}
