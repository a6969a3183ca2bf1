#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

pub async fn app() -> Router {
    let db = base::database::open_memory_database().await.unwrap();
    tuna::migrate(&db).await.unwrap();
    tuna::api::router(db)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub async fn miles_davis(app: &Router) -> i64 {
    let (status, artist) = post(
        app,
        "/artists",
        json!({"name": "Miles Davis", "age": 60, "bio": "Jazz trumpeter"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    artist["id"].as_i64().unwrap()
}

pub async fn genre(app: &Router, description: &str) -> i64 {
    let (status, genre) = post(app, "/genres", json!({ "description": description })).await;
    assert_eq!(status, StatusCode::CREATED);
    genre["id"].as_i64().unwrap()
}

pub async fn song(app: &Router, title: &str, artist_id: i64) -> i64 {
    let (status, song) = post(
        app,
        "/songs",
        json!({"title": title, "artist_id": artist_id, "album": "Kind of Blue", "length": 540}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    song["id"].as_i64().unwrap()
}

pub async fn link(app: &Router, song_id: i64, genre_id: i64) -> i64 {
    let (status, link) = post(
        app,
        "/songgenres",
        json!({"song_id": song_id, "genre_id": genre_id}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    link["id"].as_i64().unwrap()
}
