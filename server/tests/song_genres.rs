mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, delete, genre, get, link, miles_davis, post, put, song};

#[tokio::test]
async fn link_shows_up_on_the_song() {
    let app = app().await;
    let artist_id = miles_davis(&app).await;
    let so_what = song(&app, "So What", artist_id).await;
    let jazz = genre(&app, "Jazz").await;

    let (status, body) = post(
        &app,
        "/songgenres",
        json!({"song_id": so_what, "genre_id": jazz}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"id": 1, "song_id": so_what, "genre_id": jazz}));

    let (_, doc) = get(&app, &format!("/songs/{}", so_what)).await;
    assert_eq!(doc["genres"], json!([{"id": jazz, "description": "Jazz"}]));
}

#[tokio::test]
async fn retrieve_embeds_song_and_genre() {
    let app = app().await;
    let artist_id = miles_davis(&app).await;
    let so_what = song(&app, "So What", artist_id).await;
    let jazz = genre(&app, "Jazz").await;
    let id = link(&app, so_what, jazz).await;

    let (status, body) = get(&app, &format!("/songgenres/{}", id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": id,
            "song": {"id": so_what, "title": "So What", "artist_id": artist_id, "album": "Kind of Blue", "length": 540},
            "genre": {"id": jazz, "description": "Jazz"},
        })
    );

    let (status, list) = get(&app, "/songgenres").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([{"id": id, "song_id": so_what, "genre_id": jazz}]));
}

#[tokio::test]
async fn dangling_references_are_not_found() {
    let app = app().await;
    let artist_id = miles_davis(&app).await;
    let so_what = song(&app, "So What", artist_id).await;

    let (status, body) = post(
        &app,
        "/songgenres",
        json!({"song_id": so_what, "genre_id": 5}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Referenced Genre 5 not found");

    let jazz = genre(&app, "Jazz").await;
    let (status, body) = post(&app, "/songgenres", json!({"song_id": 8, "genre_id": jazz})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Referenced Song 8 not found");

    let (_, list) = get(&app, "/songgenres").await;
    assert_eq!(list, json!([]));
}

#[tokio::test]
async fn update_moves_the_link() {
    let app = app().await;
    let artist_id = miles_davis(&app).await;
    let so_what = song(&app, "So What", artist_id).await;
    let jazz = genre(&app, "Jazz").await;
    let modal = genre(&app, "Modal jazz").await;
    let id = link(&app, so_what, jazz).await;

    let (status, body) = put(
        &app,
        &format!("/songgenres/{}", id),
        json!({"song_id": so_what, "genre_id": modal}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"id": id, "song_id": so_what, "genre_id": modal}));

    let (_, doc) = get(&app, &format!("/songs/{}", so_what)).await;
    assert_eq!(doc["genres"], json!([{"id": modal, "description": "Modal jazz"}]));

    let (status, _) = put(
        &app,
        "/songgenres/99",
        json!({"song_id": so_what, "genre_id": modal}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_unlinks_without_touching_song_or_genre() {
    let app = app().await;
    let artist_id = miles_davis(&app).await;
    let so_what = song(&app, "So What", artist_id).await;
    let jazz = genre(&app, "Jazz").await;
    let id = link(&app, so_what, jazz).await;

    let (status, _) = delete(&app, &format!("/songgenres/{}", id)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = delete(&app, &format!("/songgenres/{}", id)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, doc) = get(&app, &format!("/songs/{}", so_what)).await;
    assert_eq!(doc["genres"], json!([]));
    let (status, _) = get(&app, &format!("/genres/{}", jazz)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn update_with_dangling_reference_leaves_link_unchanged() {
    let app = app().await;
    let artist_id = miles_davis(&app).await;
    let so_what = song(&app, "So What", artist_id).await;
    let jazz = genre(&app, "Jazz").await;
    let id = link(&app, so_what, jazz).await;
    let uri = format!("/songgenres/{}", id);

    let (status, body) = put(&app, &uri, json!({"song_id": so_what, "genre_id": 77})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Referenced Genre 77 not found");

    let (status, body) = put(&app, &uri, json!({"song_id": 55, "genre_id": jazz})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Referenced Song 55 not found");

    let (_, list) = get(&app, "/songgenres").await;
    assert_eq!(list, json!([{"id": id, "song_id": so_what, "genre_id": jazz}]));
}
