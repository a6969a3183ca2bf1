use axum::{extract::State, http::StatusCode};
use sea_orm::TransactionTrait;

use crate::api::{
    documents::ArtistRequest,
    extract::{Json, Path},
    AppState, Error,
};
use crate::repository::artists;

pub async fn artist(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<entity::Artist>, Error> {
    let tx = db.begin().await?;
    Ok(Json(artists::get(&tx, id).await?))
}

pub async fn artists(
    State(AppState(db)): State<AppState>,
) -> Result<Json<Vec<entity::Artist>>, Error> {
    let tx = db.begin().await?;
    Ok(Json(artists::list(&tx).await?))
}

pub async fn create_artist(
    State(AppState(db)): State<AppState>,
    Json(body): Json<ArtistRequest>,
) -> Result<(StatusCode, Json<entity::Artist>), Error> {
    let tx = db.begin().await?;
    let artist = artists::create(&tx, body.into_active()).await?;
    tx.commit().await?;
    Ok((StatusCode::CREATED, Json(artist)))
}

pub async fn update_artist(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<ArtistRequest>,
) -> Result<Json<entity::Artist>, Error> {
    let tx = db.begin().await?;
    let artist = artists::update(&tx, id, body.into_active()).await?;
    tx.commit().await?;
    Ok(Json(artist))
}

pub async fn delete_artist(
    State(AppState(db)): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, Error> {
    let tx = db.begin().await?;
    artists::delete(&tx, id).await?;
    tx.commit().await?;
    Ok(StatusCode::NO_CONTENT)
}
