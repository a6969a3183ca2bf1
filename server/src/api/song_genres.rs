use axum::{extract::State, http::StatusCode};
use sea_orm::TransactionTrait;

use crate::api::{
    documents::{SongGenreDocument, SongGenreRequest},
    extract::{Json, Path},
    AppState, Error,
};
use crate::repository::song_genres;

pub async fn song_genre(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SongGenreDocument>, Error> {
    let tx = db.begin().await?;
    let link = song_genres::get(&tx, id).await?;
    let (song, genre) = song_genres::expand(&tx, &link).await?;
    Ok(Json(SongGenreDocument::new(&link, song, genre)))
}

pub async fn song_genres(
    State(AppState(db)): State<AppState>,
) -> Result<Json<Vec<entity::SongGenre>>, Error> {
    let tx = db.begin().await?;
    Ok(Json(song_genres::list(&tx).await?))
}

pub async fn create_song_genre(
    State(AppState(db)): State<AppState>,
    Json(body): Json<SongGenreRequest>,
) -> Result<(StatusCode, Json<entity::SongGenre>), Error> {
    let tx = db.begin().await?;
    let link = song_genres::create(&tx, body.into_active()).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn update_song_genre(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SongGenreRequest>,
) -> Result<Json<entity::SongGenre>, Error> {
    let tx = db.begin().await?;
    let link = song_genres::update(&tx, id, body.into_active()).await?;
    tx.commit().await?;
    Ok(Json(link))
}

pub async fn delete_song_genre(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    let tx = db.begin().await?;
    song_genres::delete(&tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
