pub mod artists;
pub mod documents;
pub mod error;
pub mod extract;
pub mod genres;
pub mod song_genres;
pub mod songs;

use axum::{
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        Uri,
    },
    routing::get,
    Router,
};
pub use error::Error;
use sea_orm::DbConn;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

#[derive(Clone)]
pub struct AppState(pub DbConn);

pub fn router(conn: DbConn) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(AllowOrigin::mirror_request())
        .allow_headers([ACCEPT, CONTENT_TYPE]);
    let tracing = TraceLayer::new_for_http();
    Router::new()
        .route(
            "/artists",
            get(artists::artists).post(artists::create_artist),
        )
        .route(
            "/artists/:id",
            get(artists::artist)
                .put(artists::update_artist)
                .delete(artists::delete_artist),
        )
        .route("/genres", get(genres::genres).post(genres::create_genre))
        .route(
            "/genres/:id",
            get(genres::genre)
                .put(genres::update_genre)
                .delete(genres::delete_genre),
        )
        .route("/songs", get(songs::songs).post(songs::create_song))
        .route(
            "/songs/:id",
            get(songs::song)
                .put(songs::update_song)
                .delete(songs::delete_song),
        )
        .route(
            "/songgenres",
            get(song_genres::song_genres).post(song_genres::create_song_genre),
        )
        .route(
            "/songgenres/:id",
            get(song_genres::song_genre)
                .put(song_genres::update_song_genre)
                .delete(song_genres::delete_song_genre),
        )
        .fallback(not_found)
        .layer(cors)
        .layer(tracing)
        .with_state(AppState(conn))
}

async fn not_found(uri: Uri) -> Error {
    Error::NotFound(format!("No resource at {}", uri.path()))
}
