use axum::{extract::State, http::StatusCode};
use sea_orm::TransactionTrait;

use crate::api::{
    documents::{SongDocument, SongRequest},
    extract::{Json, Path},
    AppState, Error,
};
use crate::repository::songs;

pub async fn song(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<SongDocument>, Error> {
    let tx = db.begin().await?;
    let song = songs::get(&tx, id).await?;
    let artist = songs::artist(&tx, &song).await?;
    let genres = songs::genres(&tx, &song).await?;
    Ok(Json(SongDocument::new(song, artist, genres)))
}

pub async fn songs(State(AppState(db)): State<AppState>) -> Result<Json<Vec<entity::Song>>, Error> {
    let tx = db.begin().await?;
    Ok(Json(songs::list(&tx).await?))
}

pub async fn create_song(
    State(AppState(db)): State<AppState>,
    Json(body): Json<SongRequest>,
) -> Result<(StatusCode, Json<entity::Song>), Error> {
    let tx = db.begin().await?;
    let song = songs::create(&tx, body.into_active()).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(song)))
}

pub async fn update_song(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<SongRequest>,
) -> Result<Json<entity::Song>, Error> {
    let tx = db.begin().await?;
    let song = songs::update(&tx, id, body.into_active()).await?;
    tx.commit().await?;
    Ok(Json(song))
}

pub async fn delete_song(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    let tx = db.begin().await?;
    songs::delete(&tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
