#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use tower::ServiceExt;

use cyber_kittens::{
    app,
    repos::{KittenRepo, MemoryKittenRepo},
    services::{
        auth::{AuthService, TokenIssuer},
        id_codec::IdCodec,
    },
    state::AppState,
};

pub const SECRET: &str = "kitten-fixture-secret";
const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

pub fn test_id_codec() -> IdCodec {
    IdCodec::new(10, ALPHABET).unwrap()
}

pub fn test_router() -> Router {
    router_with_repo(Arc::new(MemoryKittenRepo::new()))
}

pub fn router_with_repo(kittens: Arc<dyn KittenRepo>) -> Router {
    let auth = AuthService::new(SECRET, 0, true).unwrap();
    let state = AppState::new(kittens, test_id_codec(), Arc::new(auth));
    app::router(state)
}

pub fn token_for(user_id: i64) -> String {
    TokenIssuer::new(SECRET, 600).issue(user_id, None).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    authorization: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(value) = authorization {
        builder = builder.header(header::AUTHORIZATION, value);
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// POST /kittens with a raw body and an explicit content type.
pub async fn post_raw(
    app: &Router,
    authorization: &str,
    content_type: &str,
    body: &'static str,
) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri("/kittens")
        .header(header::AUTHORIZATION, authorization)
        .header(header::CONTENT_TYPE, content_type)
        .body(Body::from(body))
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(res: Response<Body>) -> String {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(res: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(res).await).unwrap()
}

/// POST /kittens as `user_id`, returning the `Location` path of the new kitten.
pub async fn create_tom(app: &Router, user_id: i64) -> String {
    let res = send(
        app,
        "POST",
        "/kittens",
        Some(&bearer(&token_for(user_id))),
        Some(serde_json::json!({"name": "Tom", "age": 3, "color": "gray"})),
    )
    .await;
    assert_eq!(res.status(), 201);

    res.headers()[header::LOCATION]
        .to_str()
        .unwrap()
        .to_string()
}
